//! rasterlab-test - Shared fixtures for regression tests
//!
//! The engine performs no file I/O, so test images are built in memory:
//! small synthetic rasters with known statistics (uniform fields,
//! gradients, checkerboards) plus comparison assertions used by the
//! `tests/*_reg.rs` suites across the workspace.

use rasterlab_core::{Raster, RasterMut, Rgb, luma};

/// Build a raster filled with one pixel value.
pub fn uniform(width: u32, height: u32, px: Rgb) -> Raster {
    let mut rm = RasterMut::matching(&Raster::new(width, height).unwrap());
    rm.fill(px);
    rm.into()
}

/// Build a raster from a closure over coordinates.
pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgb) -> Raster {
    let mut rm = RasterMut::matching(&Raster::new(width, height).unwrap());
    for y in 0..height {
        for x in 0..width {
            rm.set_unchecked(x, y, f(x, y));
        }
    }
    rm.into()
}

/// Build a horizontal gray ramp: luma 0 at the left edge, 255 at the
/// right edge (for `width >= 2`).
pub fn gray_ramp(width: u32, height: u32) -> Raster {
    from_fn(width, height, |x, _| {
        let level = (x as u64 * 255 / (width as u64 - 1).max(1)) as u8;
        Rgb::gray(level)
    })
}

/// Build a checkerboard of two pixel values, cell size 1.
pub fn checkerboard(width: u32, height: u32, a: Rgb, b: Rgb) -> Raster {
    from_fn(width, height, |x, y| if (x + y) % 2 == 0 { a } else { b })
}

/// Assert two rasters are pixel-for-pixel identical.
///
/// # Panics
///
/// Panics with the first differing coordinate.
pub fn assert_rasters_eq(actual: &Raster, expected: &Raster) {
    assert_eq!(actual.width(), expected.width(), "width mismatch");
    assert_eq!(actual.height(), expected.height(), "height mismatch");
    for y in 0..expected.height() {
        for x in 0..expected.width() {
            let a = actual.get_unchecked(x, y);
            let e = expected.get_unchecked(x, y);
            assert_eq!(a, e, "pixel ({x},{y}): got {a:?}, expected {e:?}");
        }
    }
}

/// Largest absolute per-channel difference between two same-size rasters.
pub fn max_channel_delta(a: &Raster, b: &Raster) -> u8 {
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    let mut max = 0u8;
    for y in 0..a.height() {
        for x in 0..a.width() {
            let pa = a.get_unchecked(x, y);
            let pb = b.get_unchecked(x, y);
            for (ca, cb) in [(pa.r, pb.r), (pa.g, pb.g), (pa.b, pb.b)] {
                max = max.max(ca.abs_diff(cb));
            }
        }
    }
    max
}

/// Mean luma over a raster.
pub fn mean_luma(raster: &Raster) -> f64 {
    let mut sum = 0.0f64;
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            sum += luma(raster.get_unchecked(x, y)) as f64;
        }
    }
    sum / (raster.width() as f64 * raster.height() as f64)
}
