//! Built grid state: sections, colors, occupancy.

use crate::color::Rgba;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::occupancy::OccupancyGrid;
use crate::section::MeshSection;

/// The output of one grid build.
///
/// Owns an ordered sequence of [`MeshSection`]s covering `[0, height)` rows
/// with no gaps or overlaps, plus the per-node occupancy map. A model is
/// rebuilt wholesale by [`GridMeshBuilder::build`](crate::GridMeshBuilder::build);
/// between builds only colors and occupancy mutate, never topology.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    config: GridConfig,
    sections: Vec<MeshSection>,
    occupancy: OccupancyGrid,
}

impl GridModel {
    pub(crate) fn new(
        config: GridConfig,
        sections: Vec<MeshSection>,
        occupancy: OccupancyGrid,
    ) -> Self {
        Self {
            config,
            sections,
            occupancy,
        }
    }

    /// The config this model was built from.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The mesh sections in increasing `start_row` order.
    #[must_use]
    pub fn sections(&self) -> &[MeshSection] {
        &self.sections
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    /// Total vertex count across all sections.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.sections.iter().map(MeshSection::num_vertices).sum()
    }

    /// Total triangle count across all sections.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.sections.iter().map(MeshSection::num_triangles).sum()
    }

    /// The section containing absolute grid row `y`, if any.
    ///
    /// Sections are disjoint and ordered, so a linear scan suffices at the
    /// section counts this library produces.
    #[must_use]
    pub fn section_for_row(&self, y: u32) -> Option<&MeshSection> {
        self.sections.iter().find(|s| s.contains_row(y))
    }

    fn section_for_row_mut(&mut self, y: u32) -> Option<&mut MeshSection> {
        self.sections.iter_mut().find(|s| s.contains_row(y))
    }

    /// Paints all 4 corner colors of node `(x, y)` in place.
    ///
    /// `x` and `y` are absolute grid coordinates; out of range is a silent
    /// no-op. Topology is untouched, so this is O(1) in the grid size and
    /// never requires a rebuild.
    pub fn set_node_color(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.config.width || y >= self.config.height {
            return;
        }
        if let Some(section) = self.section_for_row_mut(y) {
            let local_y = y - section.start_row();
            section.paint_node(x, local_y, color);
        }
    }

    /// The color of node `(x, y)`, or `None` out of range.
    ///
    /// Reads the bottom-left corner; the painting API keeps all 4 corners
    /// of a node in agreement.
    #[must_use]
    pub fn node_color(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.config.width || y >= self.config.height {
            return None;
        }
        self.section_for_row(y).map(|section| {
            let local_y = y - section.start_row();
            section.colors()[section.local_vertex_index(x, local_y)]
        })
    }

    /// Replaces one section's entire color buffer.
    ///
    /// # Errors
    ///
    /// [`GridError::SectionOutOfRange`] if `section` is not a valid index,
    /// [`GridError::SizeMismatch`] if `colors` does not match the section's
    /// vertex count.
    pub fn set_vertex_colors(&mut self, section: usize, colors: Vec<Rgba>) -> Result<()> {
        let count = self.sections.len();
        let target = self
            .sections
            .get_mut(section)
            .ok_or(GridError::SectionOutOfRange {
                index: section,
                count,
            })?;
        if colors.len() != target.num_vertices() {
            return Err(GridError::SizeMismatch {
                expected: target.num_vertices(),
                actual: colors.len(),
            });
        }
        target.replace_colors(colors);
        Ok(())
    }

    /// Repaints every vertex of every section.
    pub fn fill_color(&mut self, color: Rgba) {
        for section in &mut self.sections {
            section.fill_color(color);
        }
    }

    /// Marks node `(x, y)` occupied or vacant. Out of range is a no-op.
    pub fn set_occupied(&mut self, x: u32, y: u32, occupied: bool) {
        self.occupancy.set_occupied(x, y, occupied);
    }

    /// Returns whether node `(x, y)` is occupied. Out of range is vacant.
    #[must_use]
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.occupancy.is_occupied(x, y)
    }

    /// The underlying occupancy map.
    #[must_use]
    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }
}
