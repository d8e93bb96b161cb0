//! Grid mesh construction and section partitioning.

use crate::config::GridConfig;
use crate::model::GridModel;
use crate::occupancy::OccupancyGrid;
use crate::quad::{Quad, VERTS_PER_NODE};
use crate::section::MeshSection;

/// Default vertex ceiling per section, chosen to stay under common
/// single-mesh 16-bit index limits (65535) with headroom.
pub const MAX_VERTICES_PER_SECTION: u32 = 65_000;

/// Builds grid meshes split into vertex-count-bounded sections.
///
/// The builder is stateless apart from its vertex ceiling; `build` is a pure
/// function of the config and can be called any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMeshBuilder {
    max_vertices_per_section: u32,
}

impl Default for GridMeshBuilder {
    fn default() -> Self {
        Self {
            max_vertices_per_section: MAX_VERTICES_PER_SECTION,
        }
    }
}

impl GridMeshBuilder {
    /// Creates a builder with the default vertex ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the per-section vertex ceiling.
    ///
    /// Values below 4 are clamped to 4; one quad must always fit.
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: u32) -> Self {
        self.max_vertices_per_section = max_vertices.max(VERTS_PER_NODE);
        self
    }

    /// Returns the per-section vertex ceiling.
    #[must_use]
    pub fn max_vertices_per_section(&self) -> u32 {
        self.max_vertices_per_section
    }

    /// Rows per section for a given grid width, clamped to at least 1.
    ///
    /// The clamp guarantees progress when a single row alone exceeds the
    /// ceiling (`width > max_quads_per_section`); such a section is
    /// oversized, which callers with hard index limits must handle by
    /// raising the ceiling or narrowing the grid.
    fn rows_per_section(&self, width: u32) -> u32 {
        let max_quads_per_section = self.max_vertices_per_section / VERTS_PER_NODE;
        (max_quads_per_section / width).max(1)
    }

    /// Builds a fresh [`GridModel`] for `config`.
    ///
    /// The model fully replaces any previously built state: sections are
    /// regenerated from scratch, every vertex color resets to opaque white,
    /// and the occupancy grid resets to vacant. A zero-area grid yields a
    /// model with no sections.
    #[must_use]
    pub fn build(&self, config: GridConfig) -> GridModel {
        let occupancy = OccupancyGrid::new(config.width, config.height);
        if config.is_empty() {
            log::debug!(
                "grid {}x{} is empty, built 0 sections",
                config.width,
                config.height
            );
            return GridModel::new(config, Vec::new(), occupancy);
        }

        let rows_per_section = self.rows_per_section(config.width);
        let section_count = config.height.div_ceil(rows_per_section);
        let mut sections = Vec::with_capacity(section_count as usize);

        for i in 0..section_count {
            let start_row = i * rows_per_section;
            let row_count = rows_per_section.min(config.height - start_row);
            if row_count == 0 {
                break;
            }
            sections.push(build_section(&config, start_row, row_count));
        }

        log::debug!(
            "built {}x{} grid: {} sections, {} rows/section, ceiling {} vertices",
            config.width,
            config.height,
            sections.len(),
            rows_per_section,
            self.max_vertices_per_section
        );

        GridModel::new(config, sections, occupancy)
    }
}

/// Fills one section's buffers, iterating nodes row-major (`y` outer,
/// `x` inner) so node `(x, local_y)` owns local vertices
/// `(local_y * width + x) * 4 ..+ 4`.
fn build_section(config: &GridConfig, start_row: u32, row_count: u32) -> MeshSection {
    let mut section = MeshSection::with_capacity(start_row, row_count, config.width);
    {
        let (vertices, indices) = section.vertices_mut();
        for local_y in 0..row_count {
            let y = start_row + local_y;
            for x in 0..config.width {
                Quad::for_node(config, x, y).append_to(vertices, indices);
            }
        }
    }
    section.fill_default_colors();
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use glam::Vec3;
    use proptest::prelude::*;

    #[test]
    fn test_empty_grid_has_no_sections() {
        let builder = GridMeshBuilder::new();
        assert_eq!(builder.build(GridConfig::new(0, 10)).num_sections(), 0);
        assert_eq!(builder.build(GridConfig::new(10, 0)).num_sections(), 0);
        assert_eq!(builder.build(GridConfig::new(0, 0)).num_sections(), 0);
    }

    #[test]
    fn test_single_section_counts() {
        let model = GridMeshBuilder::new().build(GridConfig::new(4, 3));
        assert_eq!(model.num_sections(), 1);
        assert_eq!(model.num_vertices(), 4 * 3 * 4);
        assert_eq!(model.num_triangles(), 4 * 3 * 2);

        let section = &model.sections()[0];
        assert_eq!(section.colors().len(), section.num_vertices());
        assert!(section.colors().iter().all(|&c| c == Rgba::WHITE));
    }

    #[test]
    fn test_worked_example_partition() {
        // 2x3 grid with a ceiling of 8 vertices: 2 quads per section,
        // one row per section, three sections.
        let model = GridMeshBuilder::new()
            .with_max_vertices(8)
            .build(GridConfig::new(2, 3));

        assert_eq!(model.num_sections(), 3);
        for (i, section) in model.sections().iter().enumerate() {
            assert_eq!(section.start_row(), i as u32);
            assert_eq!(section.row_count(), 1);
            assert_eq!(section.num_vertices(), 8);
            assert_eq!(section.indices().len(), 12);
        }
    }

    #[test]
    fn test_uneven_final_section() {
        // 7 rows at 3 rows per section: 3 + 3 + 1.
        let model = GridMeshBuilder::new()
            .with_max_vertices(3 * 4 * 4) // 3 rows of width 4
            .build(GridConfig::new(4, 7));

        let rows: Vec<u32> = model.sections().iter().map(MeshSection::row_count).collect();
        assert_eq!(rows, vec![3, 3, 1]);
        assert_eq!(model.num_vertices(), 4 * 7 * 4);
    }

    #[test]
    fn test_oversized_row_still_progresses() {
        // A single row (10 quads = 40 vertices) exceeds the ceiling of 8;
        // rows per section clamps to 1 instead of looping forever.
        let model = GridMeshBuilder::new()
            .with_max_vertices(8)
            .build(GridConfig::new(10, 3));

        assert_eq!(model.num_sections(), 3);
        for section in model.sections() {
            assert_eq!(section.row_count(), 1);
            assert_eq!(section.num_vertices(), 40);
        }
    }

    #[test]
    fn test_indices_local_and_in_range() {
        let model = GridMeshBuilder::new()
            .with_max_vertices(16)
            .build(GridConfig::new(2, 5));

        for section in model.sections() {
            assert_eq!(section.indices().len() % 3, 0);
            for &idx in section.indices() {
                assert!(
                    (idx as usize) < section.num_vertices(),
                    "index {idx} escapes section of {} vertices",
                    section.num_vertices()
                );
            }
        }
    }

    #[test]
    fn test_sections_share_global_layout() {
        // The same node produces the same world-space quad whether the grid
        // is split or not.
        let config = GridConfig::new(3, 4).with_spacing(0.5);
        let whole = GridMeshBuilder::new().build(config);
        let split = GridMeshBuilder::new().with_max_vertices(12).build(config);

        let flat_whole: Vec<Vec3> = whole
            .sections()
            .iter()
            .flat_map(|s| s.vertices().iter().copied())
            .collect();
        let flat_split: Vec<Vec3> = split
            .sections()
            .iter()
            .flat_map(|s| s.vertices().iter().copied())
            .collect();
        assert_eq!(flat_whole, flat_split);
    }

    #[test]
    fn test_ceiling_floors_at_one_quad() {
        let builder = GridMeshBuilder::new().with_max_vertices(0);
        assert_eq!(builder.max_vertices_per_section(), 4);
        let model = builder.build(GridConfig::new(1, 2));
        assert_eq!(model.num_sections(), 2);
    }

    proptest! {
        #[test]
        fn prop_total_counts(
            width in 0u32..12,
            height in 0u32..12,
            ceiling in 4u32..96,
        ) {
            let model = GridMeshBuilder::new()
                .with_max_vertices(ceiling)
                .build(GridConfig::new(width, height));

            let nodes = (width as usize) * (height as usize);
            prop_assert_eq!(model.num_vertices(), nodes * 4);
            prop_assert_eq!(model.num_triangles(), nodes * 2);
            let colors: usize = model.sections().iter().map(|s| s.colors().len()).sum();
            prop_assert_eq!(colors, nodes * 4);
        }

        #[test]
        fn prop_sections_partition_rows(
            width in 1u32..12,
            height in 1u32..12,
            ceiling in 4u32..96,
        ) {
            let model = GridMeshBuilder::new()
                .with_max_vertices(ceiling)
                .build(GridConfig::new(width, height));

            let mut next_row = 0;
            for section in model.sections() {
                prop_assert_eq!(section.start_row(), next_row, "gap or overlap");
                prop_assert!(section.row_count() >= 1);
                next_row += section.row_count();
            }
            prop_assert_eq!(next_row, height, "rows not fully covered");
        }

        #[test]
        fn prop_build_is_deterministic(
            width in 1u32..10,
            height in 1u32..10,
            spacing in 0.0f32..2.0,
        ) {
            let config = GridConfig::new(width, height).with_spacing(spacing);
            let a = GridMeshBuilder::new().build(config);
            let b = GridMeshBuilder::new().build(config);
            prop_assert_eq!(a.sections(), b.sections());
        }
    }
}
