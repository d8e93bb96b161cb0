//! Error types for gridmesh.

use thiserror::Error;

/// The main error type for gridmesh operations.
///
/// Most of the library is total over its input domain: degenerate dimensions
/// produce an empty model and out-of-range node coordinates are silently
/// ignored. Errors only arise from bulk-data APIs where a length or index
/// mismatch would otherwise corrupt a section's buffers.
#[derive(Error, Debug)]
pub enum GridError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A section index beyond the model's section list.
    #[error("section index {index} out of range ({count} sections)")]
    SectionOutOfRange { index: usize, count: usize },
}

/// A specialized Result type for gridmesh operations.
pub type Result<T> = std::result::Result<T, GridError>;
