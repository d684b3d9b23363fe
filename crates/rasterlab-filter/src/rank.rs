//! Rank (order-statistic) filtering
//!
//! The median filter collects the full 3x3 neighborhood per channel,
//! sorts each channel's nine candidates in descending order, and selects
//! the middle value. Each channel is ranked independently, so the output
//! pixel's channels can come from different neighbors.

use rasterlab_core::{Filter, Raster, Rgb};

/// Number of candidates in the 3x3 window
const WINDOW: usize = 9;

/// Index of the median after a descending sort of nine values
const MEDIAN_INDEX: usize = 4;

/// 3x3 per-channel median filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Median {
    /// Create a median filter.
    pub fn new() -> Self {
        Median
    }
}

impl Filter for Median {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        let mut reds = [0u8; WINDOW];
        let mut greens = [0u8; WINDOW];
        let mut blues = [0u8; WINDOW];

        let mut i = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let px = source.get_clamped(x as i64 + dx, y as i64 + dy);
                reds[i] = px.r;
                greens[i] = px.g;
                blues[i] = px.b;
                i += 1;
            }
        }

        reds.sort_unstable_by(|a, b| b.cmp(a));
        greens.sort_unstable_by(|a, b| b.cmp(a));
        blues.sort_unstable_by(|a, b| b.cmp(a));

        Rgb::new(reds[MEDIAN_INDEX], greens[MEDIAN_INDEX], blues[MEDIAN_INDEX])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{RasterMut, Unattended};

    #[test]
    fn median_channels_rank_independently() {
        // 3x3 image where the max red and max green sit on different
        // neighbors; the median of each channel is picked separately.
        let mut rm = RasterMut::matching(&Raster::new(3, 3).unwrap());
        for y in 0..3 {
            for x in 0..3 {
                rm.set_unchecked(x, y, Rgb::new((x * 100) as u8, (y * 100) as u8, 50));
            }
        }
        let src: Raster = rm.into();
        let out = Median.process(&src, &mut Unattended).into_raster().unwrap();
        // Center pixel: reds {0,100,200} x3 -> median 100; same for green.
        assert_eq!(out.get_unchecked(1, 1), Rgb::new(100, 100, 50));
    }
}
