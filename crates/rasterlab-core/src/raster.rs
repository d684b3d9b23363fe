//! Raster - the image container
//!
//! A `Raster` is a dense width × height grid of 8-bit RGB pixels stored
//! row-major. It is the single image type every filter reads from and
//! writes to.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To write pixels, convert to a `RasterMut` via [`Raster::try_into_mut`]
//! or allocate a fresh destination with [`RasterMut::matching`], then
//! convert back with `Into<Raster>`. A filter pass therefore reads a
//! shared source while holding exclusive ownership of its destination;
//! the destination only becomes shareable once the pass completes.

use crate::error::{Error, Result};
use crate::{Rgb, clamp_coord};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, Clone)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Interleaved RGB bytes, row-major, 3 bytes per pixel
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        3 * (y as usize * self.width as usize + x as usize)
    }
}

/// Immutable, shareable image handle.
///
/// # Examples
///
/// ```
/// use rasterlab_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster(Arc<RasterData>);

impl Raster {
    /// Create a black raster with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = 3 * width as usize * height as usize;
        Ok(Raster(Arc::new(RasterData {
            width,
            height,
            data: vec![0; len],
        })))
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.0.width || y >= self.0.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Rgb {
        let i = self.0.offset(x, y);
        Rgb::new(self.0.data[i], self.0.data[i + 1], self.0.data[i + 2])
    }

    /// Get the pixel at a signed coordinate, re-projected to the nearest
    /// edge pixel (replicate border).
    ///
    /// This is the accessor neighborhood filters use: out-of-range
    /// coordinates never reach the pixel store.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> Rgb {
        let cx = clamp_coord(x, self.0.width);
        let cy = clamp_coord(y, self.0.height);
        self.get_unchecked(cx, cy)
    }

    /// Convert into a mutable raster.
    ///
    /// Succeeds only when this handle is the sole owner of the pixel
    /// data; otherwise the original handle is returned unchanged.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Raster> {
        match Arc::try_unwrap(self.0) {
            Ok(data) => Ok(RasterMut(data)),
            Err(arc) => Err(Raster(arc)),
        }
    }

    /// Clone the pixel data into a new mutable raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut((*self.0).clone())
    }
}

/// Exclusively owned, writable image.
///
/// Produced by [`RasterMut::matching`] (fresh black destination) or by
/// unwrapping a sole-owner [`Raster`]; converted back with `.into()`.
#[derive(Debug)]
pub struct RasterMut(RasterData);

impl RasterMut {
    /// Allocate a black raster with the same dimensions as `other`.
    ///
    /// Infallible: the dimensions were already validated when `other`
    /// was created. This is how filter passes allocate destinations.
    pub fn matching(other: &Raster) -> Self {
        let len = 3 * other.width() as usize * other.height() as usize;
        RasterMut(RasterData {
            width: other.width(),
            height: other.height(),
            data: vec![0; len],
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.0.width || y >= self.0.height {
            return None;
        }
        let i = self.0.offset(x, y);
        Some(Rgb::new(self.0.data[i], self.0.data[i + 1], self.0.data[i + 2]))
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordOutOfBounds`] if the coordinate is outside
    /// the raster.
    pub fn set(&mut self, x: u32, y: u32, px: Rgb) -> Result<()> {
        if x >= self.0.width || y >= self.0.height {
            return Err(Error::CoordOutOfBounds {
                x,
                y,
                width: self.0.width,
                height: self.0.height,
            });
        }
        self.set_unchecked(x, y, px);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, px: Rgb) {
        let i = self.0.offset(x, y);
        self.0.data[i] = px.r;
        self.0.data[i + 1] = px.g;
        self.0.data[i + 2] = px.b;
    }

    /// Fill the whole raster with one pixel value.
    pub fn fill(&mut self, px: Rgb) {
        for chunk in self.0.data.chunks_exact_mut(3) {
            chunk[0] = px.r;
            chunk[1] = px.g;
            chunk[2] = px.b;
        }
    }
}

impl From<RasterMut> for Raster {
    fn from(m: RasterMut) -> Self {
        Raster(Arc::new(m.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(Raster::new(0, 10).is_err());
        assert!(Raster::new(10, 0).is_err());
        assert!(Raster::new(1, 1).is_ok());
    }

    #[test]
    fn roundtrip_set_get() {
        let mut rm = RasterMut::matching(&Raster::new(4, 3).unwrap());
        rm.set(2, 1, Rgb::new(10, 20, 30)).unwrap();
        let r: Raster = rm.into();
        assert_eq!(r.get(2, 1), Some(Rgb::new(10, 20, 30)));
        assert_eq!(r.get(0, 0), Some(Rgb::BLACK));
        assert_eq!(r.get(4, 0), None);
    }

    #[test]
    fn clamped_access_replicates_edges() {
        let mut rm = RasterMut::matching(&Raster::new(2, 2).unwrap());
        rm.set_unchecked(0, 0, Rgb::new(1, 1, 1));
        rm.set_unchecked(1, 1, Rgb::new(9, 9, 9));
        let r: Raster = rm.into();
        assert_eq!(r.get_clamped(-5, -5), Rgb::new(1, 1, 1));
        assert_eq!(r.get_clamped(10, 10), Rgb::new(9, 9, 9));
        assert_eq!(r.get_clamped(1, 1), Rgb::new(9, 9, 9));
    }

    #[test]
    fn try_into_mut_fails_when_shared() {
        let r = Raster::new(2, 2).unwrap();
        let r2 = r.clone();
        assert!(r.try_into_mut().is_err());
        drop(r2);
    }
}
