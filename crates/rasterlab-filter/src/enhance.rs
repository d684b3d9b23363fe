//! Histogram-based contrast enhancement
//!
//! Two-pass linear contrast stretch: a precompute pass builds the
//! 256-bucket luma histogram (plus per-channel histograms), then the
//! standard sweep remaps each pixel's luma linearly between the observed
//! minimum and maximum intensity levels.

use rasterlab_core::{Control, Filter, Outcome, Raster, Rgb, engine, luma_u8};

/// 256-bucket count arrays over a raster: overall luma intensity plus
/// one histogram per channel.
///
/// Rebuilt once per filter invocation; bucket index is the clamped 8-bit
/// channel or luma value.
#[derive(Debug, Clone)]
pub struct Histogram {
    intensity: [u32; 256],
    red: [u32; 256],
    green: [u32; 256],
    blue: [u32; 256],
}

impl Histogram {
    /// Build the histograms over an entire raster.
    pub fn of(source: &Raster) -> Self {
        let mut h = Histogram {
            intensity: [0; 256],
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
        };
        for y in 0..source.height() {
            for x in 0..source.width() {
                let px = source.get_unchecked(x, y);
                h.intensity[luma_u8(px) as usize] += 1;
                h.red[px.r as usize] += 1;
                h.green[px.g as usize] += 1;
                h.blue[px.b as usize] += 1;
            }
        }
        h
    }

    /// Smallest and largest intensity levels with non-zero counts.
    ///
    /// `None` only for an empty histogram, which cannot arise from a
    /// valid raster.
    pub fn intensity_bounds(&self) -> Option<(u8, u8)> {
        let min = self.intensity.iter().position(|&c| c > 0)?;
        let max = self.intensity.iter().rposition(|&c| c > 0)?;
        Some((min as u8, max as u8))
    }

    /// Overall intensity counts.
    pub fn intensity(&self) -> &[u32; 256] {
        &self.intensity
    }

    /// Red channel counts.
    pub fn red(&self) -> &[u32; 256] {
        &self.red
    }

    /// Green channel counts.
    pub fn green(&self) -> &[u32; 256] {
        &self.green
    }

    /// Blue channel counts.
    pub fn blue(&self) -> &[u32; 256] {
        &self.blue
    }
}

/// Linear contrast stretch over the luma range.
///
/// Output pixels are grayscale: each pixel's luma is remapped so the
/// observed [min, max] range spans the full [0, 255] scale. A flat image
/// (max <= min) passes through unchanged, keeping its color.
#[derive(Debug, Clone, Default)]
pub struct ContrastStretch {
    /// Intensity bounds from the precompute pass; per-invocation state.
    bounds: Option<(u8, u8)>,
}

impl ContrastStretch {
    /// Create a contrast-stretch filter.
    pub fn new() -> Self {
        ContrastStretch::default()
    }
}

impl Filter for ContrastStretch {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let px = source.get_unchecked(x, y);
        match self.bounds {
            Some((min, max)) if max > min => {
                let intensity = luma_u8(px);
                let scaled =
                    255.0 * (intensity as f32 - min as f32) / (max as f32 - min as f32);
                Rgb::gray(scaled.round().clamp(0.0, 255.0) as u8)
            }
            // Degenerate (flat) histogram: pass the source through.
            _ => px,
        }
    }

    fn process(&mut self, source: &Raster, ctl: &mut dyn Control) -> Outcome {
        self.bounds = Histogram::of(source).intensity_bounds();
        engine::sweep(&mut |s, x, y| self.compute_pixel(s, x, y), source, ctl)
    }
}
