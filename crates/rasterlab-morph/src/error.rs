//! Error types for rasterlab-morph

use thiserror::Error;

/// Errors that can occur while constructing morphological filters
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidElement(String),
}

/// Result type for morphology construction
pub type MorphResult<T> = Result<T, MorphError>;
