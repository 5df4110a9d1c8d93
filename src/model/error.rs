//! Error types for model loading.
//!
//! Layout and reconciliation never fail; the only fallible model operations are
//! reading and decoding model documents supplied by the host.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a model document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The model file could not be read.
    #[error("Failed to read model file at {path:?}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error message.
        reason: String,
    },

    /// The document is not a valid model.
    #[error("Invalid model document: {reason}")]
    Decode {
        /// serde_json error message.
        reason: String,
    },
}
