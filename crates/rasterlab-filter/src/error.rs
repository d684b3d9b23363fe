//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur while constructing filters
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;
