//! rasterlab - Image filter engine
//!
//! A family of pixel-transform filters driven over 8-bit RGB rasters
//! with cooperative progress reporting and cancellation.
//!
//! # Overview
//!
//! - Convolution filters: box blur, Gaussian, Sobel, sharpen, emboss
//! - Rank filters: median, dilation, erosion, opening, closing
//! - Histogram contrast stretch and gray-world color balance
//! - Geometric distortions: glass jitter, sinusoidal wave
//! - Pointwise maps: invert, grayscale
//!
//! # Example
//!
//! ```
//! use rasterlab::{Filter, Raster, Unattended};
//! use rasterlab::filter::Convolution;
//!
//! let source = Raster::new(64, 48).unwrap();
//! let out = Convolution::blur().process(&source, &mut Unattended);
//! let blurred = out.into_raster().expect("not cancelled");
//! assert_eq!(blurred.width(), 64);
//! ```

// Re-export core types (image container and engine, used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_color as color;
pub use rasterlab_filter as filter;
pub use rasterlab_morph as morph;
pub use rasterlab_transform as transform;
