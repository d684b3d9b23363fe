//! rasterlab-morph - Morphological rank filters
//!
//! This crate provides channel-wise grayscale morphology over RGB
//! rasters:
//!
//! - Structuring elements defining the sampled neighborhood shape
//! - [`Dilation`] and [`Erosion`] order-statistic filters
//! - [`Opening`] and [`Closing`], each composed of two full sweeps with
//!   progress and cancellation honored in both

mod error;
pub mod rankmorph;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use rankmorph::{Closing, Dilation, Erosion, Opening};
pub use sel::StructuringElement;
