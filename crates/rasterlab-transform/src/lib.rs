//! rasterlab-transform - Geometric distortion filters
//!
//! Coordinate-remapping filters that sample the source at displaced
//! positions: random jitter ([`Glass`]) and sinusoidal shear ([`Wave`]).
//! These never combine neighborhoods; every operation here is total, so
//! the crate defines no error type.

pub mod distort;

pub use distort::{Glass, Wave};
