//! rasterlab-filter - Convolution, rank, and histogram filters
//!
//! This crate provides:
//!
//! - Convolution with arbitrary kernels ([`Convolution`]) and the named
//!   kernels built on it: box blur, Gaussian blur, Sobel edge detection,
//!   and sharpening
//! - The [`Emboss`] relief filter
//! - The per-channel [`Median`] rank filter
//! - The two-pass [`ContrastStretch`] histogram filter
//!
//! All filters implement `rasterlab_core::Filter` and run under the
//! engine's column-sweep driver with cooperative cancellation.

pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;
pub mod rank;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{Convolution, EdgeOrientation, Emboss};
pub use enhance::{ContrastStretch, Histogram};
pub use rank::Median;
