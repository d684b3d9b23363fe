//! Coordinate-remapping distortion filters
//!
//! These filters sample the source at a displaced coordinate instead of
//! combining a neighborhood: [`Glass`] jitters the sample position
//! randomly, [`Wave`] displaces it sinusoidally.

use rand::RngExt;
use rand::rngs::ThreadRng;
use rasterlab_core::{Filter, Raster, Rgb};
use std::f64::consts::PI;

/// Maximum jitter reach of the glass filter, in pixels each way.
const GLASS_SCATTER: f64 = 10.0;

/// Frosted-glass distortion: each output pixel samples the source at a
/// uniformly jittered position within ±5 pixels on each axis, clamped
/// to the image. Draws fresh randomness per pixel; runs are not
/// reproducible across invocations.
#[derive(Debug)]
pub struct Glass {
    rng: ThreadRng,
}

impl Glass {
    /// Create a glass filter with a thread-local RNG.
    pub fn new() -> Self {
        Glass { rng: rand::rng() }
    }
}

impl Default for Glass {
    fn default() -> Self {
        Glass::new()
    }
}

impl Filter for Glass {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let jx = (GLASS_SCATTER * (self.rng.random::<f64>() - 0.5)).round() as i64;
        let jy = (GLASS_SCATTER * (self.rng.random::<f64>() - 0.5)).round() as i64;
        source.get_clamped(x as i64 + jx, y as i64 + jy)
    }
}

/// Peak horizontal displacement of the wave filters, in pixels.
const WAVE_AMPLITUDE: f64 = 20.0;

/// Spatial period of the wave, in pixels.
const WAVE_PERIOD: f64 = 90.0;

/// Which coordinate drives the wave phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WavePhase {
    AlongX,
    AlongY,
}

/// Sinusoidal horizontal shear.
///
/// The sample x-coordinate is displaced by
/// `round(20 · sin(2π · t / 90))` where `t` is the phase coordinate; the
/// y-coordinate passes through unmodified. A displaced coordinate
/// outside the image produces black rather than clamping, leaving dark
/// bands at the swept edges.
///
/// [`Wave::along_y`] intentionally derives the phase from y while still
/// displacing x; the resulting columns shift in unison per row.
#[derive(Debug, Clone, Copy)]
pub struct Wave {
    phase: WavePhase,
}

impl Wave {
    /// Wave whose phase follows the x coordinate.
    pub fn along_x() -> Self {
        Wave {
            phase: WavePhase::AlongX,
        }
    }

    /// Wave whose phase follows the y coordinate (displacement still
    /// applied to x).
    pub fn along_y() -> Self {
        Wave {
            phase: WavePhase::AlongY,
        }
    }
}

impl Filter for Wave {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let t = match self.phase {
            WavePhase::AlongX => x,
            WavePhase::AlongY => y,
        } as f64;
        let offset = (WAVE_AMPLITUDE * (2.0 * PI * t / WAVE_PERIOD).sin()).round() as i64;
        let sx = x as i64 + offset;
        if sx < 0 || sx >= source.width() as i64 {
            Rgb::BLACK
        } else {
            source.get_unchecked(sx as u32, y)
        }
    }
}
