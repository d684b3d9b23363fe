//! Gray-world balance regression tests

use rasterlab_color::GrayWorld;
use rasterlab_color::balance::FALLBACK_GRAY;
use rasterlab_core::{Filter, Rgb, Unattended};
use rasterlab_test::{assert_rasters_eq, from_fn, uniform};

#[test]
fn uniform_gray_image_is_a_fixed_point() {
    let src = uniform(8, 8, Rgb::gray(90));
    let out = GrayWorld::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    assert_rasters_eq(&out, &src);
}

#[test]
fn color_cast_is_pulled_toward_neutral() {
    // Uniform warm cast: averages are (200, 100, 100), grand 400/3.
    let src = uniform(10, 10, Rgb::new(200, 100, 100));
    let out = GrayWorld::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    // Every channel rescales to the grand average, rounded.
    let expected = Rgb::gray(133);
    assert_rasters_eq(&out, &uniform(10, 10, expected));
}

#[test]
fn black_image_falls_back_to_constant_gray() {
    let src = uniform(4, 4, Rgb::BLACK);
    let out = GrayWorld::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    assert_rasters_eq(&out, &uniform(4, 4, FALLBACK_GRAY));
}

#[test]
fn single_dead_channel_also_falls_back() {
    // Blue average is zero even though the image is not black.
    let src = uniform(4, 4, Rgb::new(120, 80, 0));
    let out = GrayWorld::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    assert_rasters_eq(&out, &uniform(4, 4, FALLBACK_GRAY));
}

#[test]
fn rescale_clamps_at_channel_ceiling() {
    let src = from_fn(2, 1, |x, _| {
        if x == 0 { Rgb::new(250, 10, 10) } else { Rgb::new(250, 250, 250) }
    });
    let out = GrayWorld::new()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    // Red average 250, grand (250+130+130)/3 = 170: red scales down,
    // green/blue scale up and clamp at 255 for the bright pixel.
    let bright = out.get_unchecked(1, 0);
    assert_eq!(bright.r, 170);
    assert_eq!(bright.g, 255);
    assert_eq!(bright.b, 255);
}
