//! rasterlab-core - Image container and filter engine
//!
//! This crate provides the pieces every rasterlab filter builds on:
//!
//! - [`Raster`] / [`RasterMut`]: the 8-bit RGB image container with
//!   shared read-only handles and exclusively owned destinations
//! - [`Rgb`] and luma helpers
//! - The filter engine: the [`Filter`] trait, the column-sweep driver
//!   [`engine::sweep`], and the progress/cancellation [`Control`]
//!
//! Concrete filters live in the domain crates (`rasterlab-filter`,
//! `rasterlab-morph`, `rasterlab-transform`, `rasterlab-color`).

pub mod color;
pub mod engine;
mod error;
mod raster;

pub use color::{Rgb, clamp_channel, luma, luma_u8};
pub use engine::{CallbackControl, CancelFlag, Control, Filter, Outcome, Unattended};
pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Clamp a signed coordinate into `[0, extent - 1]`.
///
/// Used for replicate-border neighborhood access; `extent` is a raster
/// width or height and is always non-zero.
#[inline]
pub fn clamp_coord(value: i64, extent: u32) -> u32 {
    value.clamp(0, extent as i64 - 1) as u32
}
