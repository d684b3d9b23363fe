//! RGB color type and luma helpers
//!
//! All rasters carry 8-bit-per-channel RGB pixels. Luma uses the
//! Rec. 601 weights 0.299 / 0.587 / 0.114, which is the brightness
//! approximation shared by the grayscale, emboss, median, and histogram
//! code paths.

/// An 8-bit RGB pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black (0, 0, 0)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a pixel from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Create a gray pixel with all three channels equal.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Rgb::new(level, level, level)
    }

    /// Check whether all three channels are equal.
    #[inline]
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Rec. 601 luma of a pixel, unrounded.
#[inline]
pub fn luma(px: Rgb) -> f32 {
    0.299 * px.r as f32 + 0.587 * px.g as f32 + 0.114 * px.b as f32
}

/// Rec. 601 luma rounded to an 8-bit level.
///
/// The weights sum to 1, so the result of valid input is always in
/// [0, 255] without clamping.
#[inline]
pub fn luma_u8(px: Rgb) -> u8 {
    luma(px).round() as u8
}

/// Clamp a floating channel sum to the 8-bit range, rounding first.
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
