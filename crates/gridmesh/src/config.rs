//! Grid build parameters.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The plane a generated grid lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Grid in the XY plane (Z = 0), facing +Z.
    #[default]
    Vertical,
    /// Ground-aligned grid in the XZ plane (Y = 0), facing +Y.
    Horizontal,
}

impl Orientation {
    /// Maps 2D grid-plane coordinates to a world-space position.
    #[must_use]
    pub fn to_world(self, p: Vec2) -> Vec3 {
        match self {
            Self::Vertical => Vec3::new(p.x, p.y, 0.0),
            Self::Horizontal => Vec3::new(p.x, 0.0, p.y),
        }
    }

    /// The normal of the grid plane. Every vertex of a flat grid shares it.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            Self::Vertical => Vec3::Z,
            Self::Horizontal => Vec3::Y,
        }
    }
}

/// Immutable parameters for one grid build.
///
/// A grid of `width × height` nodes, each rendered as a `node_width ×
/// node_height` quad, with `spacing` between adjacent nodes. The whole grid
/// is centered at the world origin in the plane selected by `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of nodes along the grid's first axis.
    pub width: u32,
    /// Number of nodes along the grid's second axis.
    pub height: u32,
    /// Size of one node along the first axis.
    pub node_width: f32,
    /// Size of one node along the second axis.
    pub node_height: f32,
    /// Gap between adjacent nodes.
    pub spacing: f32,
    /// The plane the grid lies in.
    pub orientation: Orientation,
}

impl GridConfig {
    /// Creates a config with square `1 × 1` nodes and no spacing.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            node_width: 1.0,
            node_height: 1.0,
            spacing: 0.0,
            orientation: Orientation::default(),
        }
    }

    /// Sets the node size.
    #[must_use]
    pub fn with_node_size(mut self, node_width: f32, node_height: f32) -> Self {
        self.node_width = node_width;
        self.node_height = node_height;
        self
    }

    /// Sets the spacing between nodes.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the grid plane.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns true if the grid has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Node pitch (node size plus spacing) along each axis.
    #[must_use]
    pub fn pitch(&self) -> Vec2 {
        Vec2::new(
            self.node_width + self.spacing,
            self.node_height + self.spacing,
        )
    }

    /// Extent of the full grid along the first axis, spacing included
    /// between nodes but not around the border.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.width as f32 * (self.node_width + self.spacing) - self.spacing
    }

    /// Extent of the full grid along the second axis.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.height as f32 * (self.node_height + self.spacing) - self.spacing
    }

    /// Bottom-left corner of the grid in plane coordinates, chosen so the
    /// grid is centered at the origin.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(-self.total_width() / 2.0, -self.total_height() / 2.0)
    }

    /// Bottom-left corner of node `(x, y)` in plane coordinates.
    ///
    /// `x` and `y` are absolute grid coordinates; callers are expected to
    /// stay within `[0, width) × [0, height)`.
    #[must_use]
    pub fn node_position(&self, x: u32, y: u32) -> Vec2 {
        self.origin() + Vec2::new(x as f32, y as f32) * self.pitch()
    }
}
