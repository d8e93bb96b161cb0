//! Procedural rectangular grid mesh construction.
//!
//! This crate builds a grid of `width × height` quad nodes as flat
//! vertex/triangle/color buffers, split into [`MeshSection`]s so no single
//! section exceeds a vertex-count ceiling, ready to hand to a rendering
//! backend's mesh-upload API. On top of the static geometry it supports
//! per-node color painting and per-node boolean occupancy, both mutating in
//! place without touching topology.
//!
//! ```
//! use gridmesh::{GridConfig, GridMeshBuilder, Rgba};
//!
//! let config = GridConfig::new(16, 16).with_spacing(0.1);
//! let mut model = GridMeshBuilder::new().build(config);
//!
//! model.set_node_color(3, 7, Rgba::rgb(1.0, 0.0, 0.0));
//! model.set_occupied(3, 7, true);
//!
//! for section in model.sections() {
//!     // upload section.vertices(), section.indices(), section.colors()
//!     assert_eq!(section.colors().len(), section.num_vertices());
//! }
//! ```

// Grid index math intentionally casts between u32/usize/f32
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Getters on small copy types don't need must_use noise beyond what's marked
#![allow(clippy::must_use_candidate)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]

pub mod builder;
pub mod color;
pub mod config;
pub mod error;
pub mod model;
pub mod occupancy;
pub mod quad;
pub mod section;

pub use builder::{GridMeshBuilder, MAX_VERTICES_PER_SECTION};
pub use color::Rgba;
pub use config::{GridConfig, Orientation};
pub use error::{GridError, Result};
pub use model::GridModel;
pub use occupancy::OccupancyGrid;
pub use quad::{Quad, INDICES_PER_NODE, VERTS_PER_NODE};
pub use section::MeshSection;

// Re-export glam types used in the public API
pub use glam::{Vec2, Vec3};
