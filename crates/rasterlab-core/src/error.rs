//! Error types for rasterlab-core
//!
//! Provides a unified error type for the core crate. Filter execution
//! itself never fails (see `engine::Outcome`); errors arise only when
//! constructing or addressing rasters.

use thiserror::Error;

/// rasterlab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate out of bounds
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    CoordOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Raster is shared and cannot be made mutable in place
    #[error("raster has outstanding shared handles")]
    SharedRaster,
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
