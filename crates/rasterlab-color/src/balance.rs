//! Gray-world color balance
//!
//! Two-pass global correction: a precompute pass measures the
//! per-channel averages over the whole source, then each pixel's
//! channels are rescaled toward the grand average, pulling the overall
//! cast to neutral gray.

use rasterlab_core::{Control, Filter, Outcome, Raster, Rgb, clamp_channel, engine};

/// Per-channel averages measured over one raster.
#[derive(Debug, Clone, Copy)]
struct ChannelAverages {
    red: f64,
    green: f64,
    blue: f64,
    /// Grand average: `(red + green + blue) / 3`
    grand: f64,
}

impl ChannelAverages {
    fn of(source: &Raster) -> Self {
        let mut sum_r = 0.0f64;
        let mut sum_g = 0.0f64;
        let mut sum_b = 0.0f64;
        for y in 0..source.height() {
            for x in 0..source.width() {
                let px = source.get_unchecked(x, y);
                sum_r += px.r as f64;
                sum_g += px.g as f64;
                sum_b += px.b as f64;
            }
        }
        let n = source.width() as f64 * source.height() as f64;
        let (red, green, blue) = (sum_r / n, sum_g / n, sum_b / n);
        ChannelAverages {
            red,
            green,
            blue,
            grand: (red + green + blue) / 3.0,
        }
    }
}

/// Fallback output when any channel average is zero (an image with at
/// least one fully dark channel has no meaningful rescale ratio).
pub const FALLBACK_GRAY: Rgb = Rgb::new(50, 50, 50);

/// Gray-world color balance filter.
///
/// With all three channel averages strictly positive, each channel is
/// scaled by `grand_average / channel_average`; otherwise every output
/// pixel is the constant [`FALLBACK_GRAY`]. A uniform gray image is a
/// fixed point (all ratios are 1).
#[derive(Debug, Clone, Default)]
pub struct GrayWorld {
    /// Averages from the precompute pass; per-invocation state.
    averages: Option<ChannelAverages>,
}

impl GrayWorld {
    /// Create a gray-world filter.
    pub fn new() -> Self {
        GrayWorld::default()
    }
}

impl Filter for GrayWorld {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        match self.averages {
            Some(avg) if avg.red > 0.0 && avg.green > 0.0 && avg.blue > 0.0 => {
                let px = source.get_unchecked(x, y);
                Rgb::new(
                    clamp_channel((px.r as f64 * avg.grand / avg.red) as f32),
                    clamp_channel((px.g as f64 * avg.grand / avg.green) as f32),
                    clamp_channel((px.b as f64 * avg.grand / avg.blue) as f32),
                )
            }
            _ => FALLBACK_GRAY,
        }
    }

    fn process(&mut self, source: &Raster, ctl: &mut dyn Control) -> Outcome {
        self.averages = Some(ChannelAverages::of(source));
        engine::sweep(&mut |s, x, y| self.compute_pixel(s, x, y), source, ctl)
    }
}
