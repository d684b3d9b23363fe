//! Geometric distortion regression tests

use rasterlab_core::{Filter, Rgb, Unattended};
use rasterlab_test::{assert_rasters_eq, from_fn, uniform};
use rasterlab_transform::{Glass, Wave};
use std::f64::consts::PI;

#[test]
fn glass_is_identity_on_uniform_image() {
    // Jitter can only land on identical pixels.
    let src = uniform(20, 20, Rgb::new(33, 66, 99));
    let out = Glass::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    assert_rasters_eq(&out, &src);
}

#[test]
fn glass_samples_within_jitter_reach() {
    // Vertical bands 16 levels apart: every output pixel must hold a
    // value present within 5 columns of its own.
    let src = from_fn(40, 8, |x, _| Rgb::gray((x * 6) as u8));
    let out = Glass::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    for y in 0..8 {
        for x in 0..40 {
            let got = out.get_unchecked(x, y).r;
            let lo = x.saturating_sub(5) * 6;
            let hi = (x + 5).min(39) * 6;
            assert!(
                (lo as u8..=hi as u8).contains(&got),
                "pixel ({x},{y}) sampled outside jitter reach: {got}"
            );
        }
    }
}

fn wave_offset(t: u32) -> i64 {
    (20.0 * (2.0 * PI * t as f64 / 90.0).sin()).round() as i64
}

#[test]
fn wave_along_x_resamples_columns() {
    let src = from_fn(90, 3, |x, _| Rgb::gray((x * 2) as u8));
    let out = Wave::along_x()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    for x in 0..90u32 {
        let sx = x as i64 + wave_offset(x);
        let expected = if (0..90).contains(&sx) {
            src.get_unchecked(sx as u32, 1)
        } else {
            Rgb::BLACK
        };
        assert_eq!(out.get_unchecked(x, 1), expected, "column {x}");
    }
}

#[test]
fn wave_along_y_shifts_whole_rows() {
    // Phase comes from y, displacement applies to x: every pixel of a
    // row shifts by the same amount.
    let src = from_fn(30, 90, |x, _| Rgb::gray((x * 8) as u8));
    let out = Wave::along_y()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    // Row 22: sin(2pi*22/90) ~ 0.9994, offset rounds to 20.
    assert_eq!(wave_offset(22), 20);
    for x in 0..30u32 {
        let expected = if x + 20 < 30 {
            src.get_unchecked(x + 20, 22)
        } else {
            Rgb::BLACK
        };
        assert_eq!(out.get_unchecked(x, 22), expected, "column {x}");
    }
    // Row 0 has zero offset and passes through.
    for x in 0..30u32 {
        assert_eq!(out.get_unchecked(x, 0), src.get_unchecked(x, 0));
    }
}

#[test]
fn wave_out_of_range_is_black_not_clamped() {
    // Narrow image: the crest of the wave sweeps past the right edge.
    let src = uniform(10, 90, Rgb::WHITE);
    let out = Wave::along_y()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    // Row 22 shifts by +20: every source x+20 is out of range.
    for x in 0..10 {
        assert_eq!(out.get_unchecked(x, 22), Rgb::BLACK);
    }
    // Row 0 is untouched.
    for x in 0..10 {
        assert_eq!(out.get_unchecked(x, 0), Rgb::WHITE);
    }
}
