//! Per-node quad geometry.

use glam::{Vec2, Vec3};

use crate::config::GridConfig;

/// Number of vertices emitted per grid node.
pub const VERTS_PER_NODE: u32 = 4;

/// Number of triangle indices emitted per grid node (two triangles).
pub const INDICES_PER_NODE: u32 = 6;

/// The four corner positions of one grid node, in the fixed emission order:
/// bottom-left, bottom-right, top-left, top-right.
///
/// A `Quad` is derived from a [`GridConfig`] and a cell coordinate, then
/// immediately flattened into a section's vertex buffer; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
}

impl Quad {
    /// Computes the quad for node `(x, y)` in absolute grid coordinates.
    #[must_use]
    pub fn for_node(config: &GridConfig, x: u32, y: u32) -> Self {
        let base = config.node_position(x, y);
        let w = config.node_width;
        let h = config.node_height;
        let o = config.orientation;
        Self {
            corners: [
                o.to_world(base),
                o.to_world(base + Vec2::new(w, 0.0)),
                o.to_world(base + Vec2::new(0.0, h)),
                o.to_world(base + Vec2::new(w, h)),
            ],
        }
    }

    /// Appends this quad's vertices and triangle indices to section buffers.
    ///
    /// The winding `(v, v+2, v+1)`, `(v+2, v+3, v+1)` is clockwise viewed
    /// from the plane normal, the front-face convention of the clockwise
    /// rendering backends this targets. It must not change.
    pub fn append_to(&self, vertices: &mut Vec<Vec3>, indices: &mut Vec<u32>) {
        let v = vertices.len() as u32;
        vertices.extend_from_slice(&self.corners);
        indices.extend_from_slice(&[v, v + 2, v + 1, v + 2, v + 3, v + 1]);
    }
}
