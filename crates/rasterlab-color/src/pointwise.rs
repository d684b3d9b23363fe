//! Pointwise color filters
//!
//! Pure per-pixel maps of the same coordinate: no neighborhood, no
//! precompute pass.

use rasterlab_core::{Filter, Raster, Rgb, luma_u8};

/// Channel inversion: `(255 - r, 255 - g, 255 - b)`.
///
/// Self-inverse: applying it twice restores the original image.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl Invert {
    /// Create an inversion filter.
    pub fn new() -> Self {
        Invert
    }
}

impl Filter for Invert {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let px = source.get_unchecked(x, y);
        Rgb::new(255 - px.r, 255 - px.g, 255 - px.b)
    }
}

/// Luma grayscale conversion: all three channels set to the pixel's
/// rounded luma. Idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grayscale;

impl Grayscale {
    /// Create a grayscale filter.
    pub fn new() -> Self {
        Grayscale
    }
}

impl Filter for Grayscale {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        Rgb::gray(luma_u8(source.get_unchecked(x, y)))
    }
}
