//! Convolution kernels
//!
//! A [`Kernel`] is a small grid of floating-point weights applied
//! symmetrically around a target pixel. Kernels are built once at filter
//! construction time and are immutable afterwards.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a row-major slice of weights.
    ///
    /// The center is `(width / 2, height / 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is
    /// zero or the slice length does not match `width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if data.len() != (width * height) as usize {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for {width}x{height}, got {}",
                width * height,
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Create a box (averaging) kernel: all weights are `1/(size*size)`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel("box size must be non-zero".into()));
        }
        let n = (size * size) as usize;
        Kernel::from_slice(size, size, &vec![1.0 / n as f32; n])
    }

    /// Create a normalized Gaussian kernel over a `(2r+1) x (2r+1)`
    /// window.
    ///
    /// `weight(i, j) = exp(-(i² + j²) / (2σ²))`, rescaled so the weights
    /// sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `radius` is zero or
    /// `sigma` is not strictly positive.
    pub fn gaussian(radius: u32, sigma: f32) -> FilterResult<Self> {
        if radius == 0 {
            return Err(FilterError::InvalidParameters(
                "gaussian radius must be >= 1".into(),
            ));
        }
        if !(sigma > 0.0) {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma must be > 0, got {sigma}"
            )));
        }
        let size = 2 * radius + 1;
        let r = radius as i32;
        let mut data = Vec::with_capacity((size * size) as usize);
        let mut norm = 0.0f32;
        for j in -r..=r {
            for i in -r..=r {
                let w = (-((i * i + j * j) as f32) / (2.0 * sigma * sigma)).exp();
                data.push(w);
                norm += w;
            }
        }
        for w in &mut data {
            *w /= norm;
        }
        Kernel::from_slice(size, size, &data)
    }

    /// Sobel kernel responding to horizontal edges (vertical gradient).
    ///
    /// Not normalized; convolution output can clip at 0/255.
    pub fn sobel_horizontal() -> Self {
        Kernel::fixed_3x3([
            -1.0, -2.0, -1.0, //
            0.0, 0.0, 0.0, //
            1.0, 2.0, 1.0,
        ])
    }

    /// Sobel kernel responding to vertical edges (horizontal gradient).
    ///
    /// Not normalized; convolution output can clip at 0/255.
    pub fn sobel_vertical() -> Self {
        Kernel::fixed_3x3([
            -1.0, 0.0, 1.0, //
            -2.0, 0.0, 2.0, //
            -1.0, 0.0, 1.0,
        ])
    }

    /// Unsharp-mask sharpening kernel: center 9, all neighbors -1.
    pub fn sharpen() -> Self {
        Kernel::fixed_3x3([
            -1.0, -1.0, -1.0, //
            -1.0, 9.0, -1.0, //
            -1.0, -1.0, -1.0,
        ])
    }

    /// Emboss kernel (diagonal gradient cross), not normalized.
    ///
    /// Used by the emboss filter, whose output is collapsed to luma and
    /// re-biased after the weighted sum.
    pub fn emboss() -> Self {
        Kernel::fixed_3x3([
            0.0, 1.0, 0.0, //
            1.0, 0.0, -1.0, //
            0.0, -1.0, 0.0,
        ])
    }

    fn fixed_3x3(data: [f32; 9]) -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: data.to_vec(),
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data (row-major).
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the weight at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_kernel_sums_to_one() {
        let k = Kernel::box_kernel(3).unwrap();
        assert_eq!(k.width(), 3);
        assert!((k.sum() - 1.0).abs() < 1e-6);
        assert!((k.get(1, 1).unwrap() - 1.0 / 9.0).abs() < 1e-7);
    }

    #[test]
    fn gaussian_is_normalized_and_peaked_at_center() {
        let k = Kernel::gaussian(3, 2.0).unwrap();
        assert_eq!(k.width(), 7);
        assert_eq!(k.center_x(), 3);
        assert!((k.sum() - 1.0).abs() < 1e-5);
        let center = k.get(3, 3).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                assert!(k.get(x, y).unwrap() <= center);
            }
        }
    }

    #[test]
    fn gaussian_rejects_bad_parameters() {
        assert!(Kernel::gaussian(0, 2.0).is_err());
        assert!(Kernel::gaussian(3, 0.0).is_err());
        assert!(Kernel::gaussian(3, -1.0).is_err());
    }

    #[test]
    fn from_slice_validates_length() {
        assert!(Kernel::from_slice(3, 3, &[0.0; 8]).is_err());
        assert!(Kernel::from_slice(0, 3, &[]).is_err());
        assert!(Kernel::from_slice(3, 3, &[0.0; 9]).is_ok());
    }

    #[test]
    fn sobel_kernels_sum_to_zero() {
        assert_eq!(Kernel::sobel_horizontal().sum(), 0.0);
        assert_eq!(Kernel::sobel_vertical().sum(), 0.0);
    }

    #[test]
    fn sharpen_sums_to_one() {
        assert_eq!(Kernel::sharpen().sum(), 1.0);
    }
}
