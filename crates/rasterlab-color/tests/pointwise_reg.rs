//! Pointwise filter regression tests

use rasterlab_color::{Grayscale, Invert};
use rasterlab_core::{Filter, Raster, Rgb, Unattended};
use rasterlab_test::{assert_rasters_eq, checkerboard, from_fn};

fn run(filter: &mut impl Filter, src: &Raster) -> Raster {
    filter.process(src, &mut Unattended).into_raster().unwrap()
}

#[test]
fn invert_is_self_inverse() {
    let src = from_fn(13, 7, |x, y| Rgb::new((x * 19) as u8, (y * 31) as u8, ((x + y) * 11) as u8));
    let once = run(&mut Invert::new(), &src);
    let twice = run(&mut Invert::new(), &once);
    assert_rasters_eq(&twice, &src);
}

#[test]
fn invert_swaps_checkerboard_extremes() {
    let src = checkerboard(2, 2, Rgb::WHITE, Rgb::BLACK);
    let out = run(&mut Invert::new(), &src);
    assert_rasters_eq(&out, &checkerboard(2, 2, Rgb::BLACK, Rgb::WHITE));
}

#[test]
fn grayscale_output_has_equal_channels() {
    let src = from_fn(9, 9, |x, y| Rgb::new((x * 28) as u8, (y * 28) as u8, 77));
    let out = run(&mut Grayscale::new(), &src);
    for y in 0..9 {
        for x in 0..9 {
            assert!(out.get_unchecked(x, y).is_gray());
        }
    }
}

#[test]
fn grayscale_is_idempotent() {
    let src = from_fn(9, 9, |x, y| Rgb::new((x * 28) as u8, 200, (y * 28) as u8));
    let once = run(&mut Grayscale::new(), &src);
    let twice = run(&mut Grayscale::new(), &once);
    assert_rasters_eq(&twice, &once);
}
