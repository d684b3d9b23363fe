//! rasterlab-color - Color balance and pointwise filters
//!
//! Global color correction ([`GrayWorld`]) and the pointwise maps
//! ([`Invert`], [`Grayscale`]). All operations here are total, so the
//! crate defines no error type.

pub mod balance;
pub mod pointwise;

pub use balance::GrayWorld;
pub use pointwise::{Grayscale, Invert};
