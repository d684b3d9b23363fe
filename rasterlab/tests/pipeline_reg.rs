//! End-to-end engine scenarios across the filter families

use rasterlab::filter::{Convolution, Median};
use rasterlab::morph::Opening;
use rasterlab::{CallbackControl, CancelFlag, Filter, Rgb, Unattended};
use rasterlab_test::{assert_rasters_eq, checkerboard, uniform};

#[test]
fn filters_chain_through_shared_rasters() {
    let src = checkerboard(12, 12, Rgb::gray(30), Rgb::gray(210));
    let blurred = Convolution::blur()
        .process(&src, &mut Unattended)
        .into_raster()
        .unwrap();
    let cleaned = Median::new()
        .process(&blurred, &mut Unattended)
        .into_raster()
        .unwrap();
    assert_eq!(cleaned.width(), 12);
    assert_eq!(cleaned.height(), 12);
}

#[test]
fn cancellation_requested_up_front_yields_no_image() {
    let src = uniform(16, 16, Rgb::gray(128));
    let flag = CancelFlag::new();
    flag.cancel();

    let mut peak = 0u32;
    let poll = flag.clone();
    let mut ctl = CallbackControl::new(|p| peak = peak.max(p), move || poll.is_cancelled());
    let out = Median::new().process(&src, &mut ctl);
    assert!(out.is_cancelled());
    assert!(out.into_raster().is_none());
    drop(ctl);
    // Progress never exceeded 0.
    assert_eq!(peak, 0);
}

#[test]
fn cancelled_run_leaves_caller_image_untouched() {
    // The caller keeps its prior raster on cancellation; a shared clone
    // observes no writes.
    let src = uniform(8, 8, Rgb::new(1, 2, 3));
    let retained = src.clone();
    let flag = CancelFlag::new();
    flag.cancel();
    let out = Opening::new().process(&src, &mut flag.clone());
    assert!(out.is_cancelled());
    assert_rasters_eq(&retained, &uniform(8, 8, Rgb::new(1, 2, 3)));
}

#[test]
fn boxed_filters_dispatch_dynamically() {
    // The menu layer above the engine holds filters as trait objects.
    let src = uniform(6, 6, Rgb::gray(100));
    let mut filters: Vec<Box<dyn Filter>> = vec![
        Box::new(Convolution::blur()),
        Box::new(Median::new()),
        Box::new(rasterlab::color::Invert::new()),
        Box::new(rasterlab::color::Invert::new()),
    ];
    let mut current = src.clone();
    for f in &mut filters {
        current = f.process(&current, &mut Unattended).into_raster().unwrap();
    }
    // Blur and median are identities on a uniform image; the two
    // inversions cancel.
    assert_rasters_eq(&current, &src);
}
