//! Convolution filters
//!
//! Generic kernel-weighted neighborhood sum plus the named kernels built
//! on it (blur, Gaussian, Sobel, sharpen) and the emboss filter, which
//! post-processes the weighted sum into a re-biased grayscale value.
//!
//! Border handling is replicate (clamp): out-of-range neighborhood
//! coordinates re-project to the nearest edge pixel.

use crate::{FilterResult, Kernel};
use rasterlab_core::{Filter, Raster, Rgb, clamp_channel};

/// Edge orientation selected when constructing a Sobel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Respond to horizontal edges (gradient down the columns)
    Horizontal,
    /// Respond to vertical edges (gradient across the rows)
    Vertical,
}

/// Accumulate the kernel-weighted sums of the neighborhood around
/// (x, y), per channel, with replicate border handling.
pub(crate) fn weighted_sums(source: &Raster, x: u32, y: u32, kernel: &Kernel) -> (f32, f32, f32) {
    let cx = kernel.center_x() as i64;
    let cy = kernel.center_y() as i64;
    let mut sum_r = 0.0f32;
    let mut sum_g = 0.0f32;
    let mut sum_b = 0.0f32;

    for ky in 0..kernel.height() {
        for kx in 0..kernel.width() {
            let sx = x as i64 + kx as i64 - cx;
            let sy = y as i64 + ky as i64 - cy;
            let px = source.get_clamped(sx, sy);
            let w = kernel.get(kx, ky).unwrap_or(0.0);
            sum_r += px.r as f32 * w;
            sum_g += px.g as f32 * w;
            sum_b += px.b as f32 * w;
        }
    }

    (sum_r, sum_g, sum_b)
}

/// Kernel-weighted neighborhood sum filter.
///
/// Each output channel is the weighted sum of the corresponding source
/// channel over the kernel window, rounded and clamped to [0, 255].
#[derive(Debug, Clone)]
pub struct Convolution {
    kernel: Kernel,
}

impl Convolution {
    /// Create a convolution filter from an arbitrary kernel.
    pub fn new(kernel: Kernel) -> Self {
        Convolution { kernel }
    }

    /// 3x3 box blur (uniform weights 1/9).
    pub fn blur() -> Self {
        // box_kernel(3) cannot fail
        Convolution::new(Kernel::box_kernel(3).unwrap())
    }

    /// Gaussian blur over a `(2·radius+1)`-sized window.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is zero or `sigma <= 0`.
    pub fn gaussian(radius: u32, sigma: f32) -> FilterResult<Self> {
        Ok(Convolution::new(Kernel::gaussian(radius, sigma)?))
    }

    /// Gaussian blur with the default window (radius 3, sigma 2).
    pub fn gaussian_default() -> Self {
        // gaussian(3, 2.0) cannot fail
        Convolution::new(Kernel::gaussian(3, 2.0).unwrap())
    }

    /// Sobel edge detection for the chosen orientation.
    ///
    /// The kernel is not normalized; output clips at 0/255.
    pub fn sobel(orientation: EdgeOrientation) -> Self {
        let kernel = match orientation {
            EdgeOrientation::Horizontal => Kernel::sobel_horizontal(),
            EdgeOrientation::Vertical => Kernel::sobel_vertical(),
        };
        Convolution::new(kernel)
    }

    /// Unsharp-mask sharpening (center 9, neighbors -1).
    pub fn sharpen() -> Self {
        Convolution::new(Kernel::sharpen())
    }

    /// The kernel this filter applies.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl Filter for Convolution {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let (r, g, b) = weighted_sums(source, x, y, &self.kernel);
        Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

/// Emboss filter.
///
/// Applies the emboss kernel, collapses the weighted sums to luma, then
/// re-biases into the mid range: `out = clamp((L + 255) / 2, 0, 255)`
/// applied identically to all three channels, producing a grayscale
/// relief image.
#[derive(Debug, Clone)]
pub struct Emboss {
    kernel: Kernel,
}

impl Emboss {
    /// Create an emboss filter.
    pub fn new() -> Self {
        Emboss {
            kernel: Kernel::emboss(),
        }
    }
}

impl Default for Emboss {
    fn default() -> Self {
        Emboss::new()
    }
}

impl Filter for Emboss {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let (r, g, b) = weighted_sums(source, x, y, &self.kernel);
        // Luma of the raw (unclamped) channel sums
        let intensity = 0.299 * r + 0.587 * g + 0.114 * b;
        Rgb::gray(clamp_channel((intensity + 255.0) / 2.0))
    }
}
