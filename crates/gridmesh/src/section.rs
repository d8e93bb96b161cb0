//! Vertex-count-bounded mesh sections.

use glam::Vec3;
use std::ops::Range;

use crate::color::Rgba;
use crate::quad::{INDICES_PER_NODE, VERTS_PER_NODE};

/// A contiguous run of full grid rows bundled into one mesh buffer.
///
/// Triangle indices are local to the section (0-based) and reference only
/// vertices within it, so each section can be uploaded as an independent
/// mesh. Invariants maintained by the builder:
/// `vertices.len() == row_count * width * 4` and
/// `colors.len() == vertices.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSection {
    start_row: u32,
    row_count: u32,
    width: u32,
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    colors: Vec<Rgba>,
}

impl MeshSection {
    /// Creates an empty section covering `row_count` rows starting at
    /// `start_row`, with buffers pre-allocated for `row_count * width` nodes.
    pub(crate) fn with_capacity(start_row: u32, row_count: u32, width: u32) -> Self {
        let nodes = (row_count as usize) * (width as usize);
        Self {
            start_row,
            row_count,
            width,
            vertices: Vec::with_capacity(nodes * VERTS_PER_NODE as usize),
            indices: Vec::with_capacity(nodes * INDICES_PER_NODE as usize),
            colors: Vec::with_capacity(nodes * VERTS_PER_NODE as usize),
        }
    }

    pub(crate) fn vertices_mut(&mut self) -> (&mut Vec<Vec3>, &mut Vec<u32>) {
        (&mut self.vertices, &mut self.indices)
    }

    pub(crate) fn fill_default_colors(&mut self) {
        self.colors.resize(self.vertices.len(), Rgba::WHITE);
    }

    /// First absolute grid row covered by this section.
    #[must_use]
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// Number of grid rows covered by this section.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// The absolute row range `[start_row, start_row + row_count)`.
    #[must_use]
    pub fn row_range(&self) -> Range<u32> {
        self.start_row..self.start_row + self.row_count
    }

    /// Returns true if absolute row `y` falls inside this section.
    #[must_use]
    pub fn contains_row(&self, y: u32) -> bool {
        self.row_range().contains(&y)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// The vertex positions, 4 per node in bottom-left, bottom-right,
    /// top-left, top-right order.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The triangle indices (every 3 consecutive indices form a triangle),
    /// local to this section.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The per-vertex colors, same length as [`vertices`](Self::vertices).
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// The color buffer as raw bytes, ready for a GPU upload API.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Index of node `(x, local_y)`'s first vertex (its bottom-left corner)
    /// within this section's buffers. `local_y` is relative to `start_row`.
    #[must_use]
    pub fn local_vertex_index(&self, x: u32, local_y: u32) -> usize {
        ((local_y * self.width + x) * VERTS_PER_NODE) as usize
    }

    /// Overwrites the 4 corner colors of node `(x, local_y)` in place.
    ///
    /// Callers are expected to have bounds-checked `x` and `local_y`
    /// against the section's width and row count.
    pub(crate) fn paint_node(&mut self, x: u32, local_y: u32, color: Rgba) {
        let base = self.local_vertex_index(x, local_y);
        self.colors[base..base + 4].fill(color);
    }

    /// Replaces the whole color buffer. Length must match the vertex count.
    pub(crate) fn replace_colors(&mut self, colors: Vec<Rgba>) {
        debug_assert_eq!(colors.len(), self.vertices.len());
        self.colors = colors;
    }

    /// Repaints every vertex in this section.
    pub(crate) fn fill_color(&mut self, color: Rgba) {
        self.colors.fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_with_nodes(start_row: u32, row_count: u32, width: u32) -> MeshSection {
        let mut section = MeshSection::with_capacity(start_row, row_count, width);
        let nodes = (row_count * width) as usize;
        {
            let (vertices, indices) = section.vertices_mut();
            vertices.resize(nodes * 4, Vec3::ZERO);
            indices.resize(nodes * 6, 0);
        }
        section.fill_default_colors();
        section
    }

    #[test]
    fn test_row_range() {
        let section = section_with_nodes(4, 3, 2);
        assert_eq!(section.row_range(), 4..7);
        assert!(section.contains_row(4));
        assert!(section.contains_row(6));
        assert!(!section.contains_row(7));
        assert!(!section.contains_row(3));
    }

    #[test]
    fn test_local_vertex_index_row_major() {
        let section = section_with_nodes(0, 2, 3);
        assert_eq!(section.local_vertex_index(0, 0), 0);
        assert_eq!(section.local_vertex_index(2, 0), 8);
        assert_eq!(section.local_vertex_index(0, 1), 12);
        assert_eq!(section.local_vertex_index(1, 1), 16);
    }

    #[test]
    fn test_paint_node_touches_exactly_four() {
        let mut section = section_with_nodes(0, 1, 3);
        let red = Rgba::rgb(1.0, 0.0, 0.0);
        section.paint_node(1, 0, red);

        for (i, &c) in section.colors().iter().enumerate() {
            if (4..8).contains(&i) {
                assert_eq!(c, red, "corner {i} not painted");
            } else {
                assert_eq!(c, Rgba::WHITE, "vertex {i} unexpectedly painted");
            }
        }
    }

    #[test]
    fn test_color_bytes_length() {
        let section = section_with_nodes(0, 1, 2);
        assert_eq!(section.color_bytes().len(), section.num_vertices() * 16);
    }
}
