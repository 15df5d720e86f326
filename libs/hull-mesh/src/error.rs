//! # Mesh Errors
//!
//! Error types for mesh loading, reduction, and hull construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the hull pipeline.
///
/// `FileNotFound`, `InsufficientGeometry`, and `HullComputationFailed` are
/// recoverable at the per-file level: the batch layer logs them and moves on
/// to the next file. Everything else propagates.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File content is not valid STL
    #[error("invalid STL: {message}")]
    InvalidStl { message: String },

    /// Fewer unique points than a 3D hull requires
    #[error("insufficient geometry: {count} unique vertices")]
    InsufficientGeometry { count: usize },

    /// The hull library rejected the point set
    #[error("convex hull computation failed: {reason}")]
    HullComputationFailed { reason: String },
}

impl MeshError {
    /// Creates a file-not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Creates an invalid-STL error.
    pub fn invalid_stl(message: impl Into<String>) -> Self {
        Self::InvalidStl {
            message: message.into(),
        }
    }

    /// Creates a hull-computation-failed error.
    pub fn hull_failed(reason: impl Into<String>) -> Self {
        Self::HullComputationFailed {
            reason: reason.into(),
        }
    }
}
