//! Morphological rank filters
//!
//! Channel-wise grayscale morphology over a structuring element:
//!
//! - [`Dilation`] selects the neighborhood maximum (never darkens)
//! - [`Erosion`] selects the neighborhood minimum (never brightens)
//! - [`Opening`] runs an erosion sweep, then a dilation sweep over the
//!   intermediate result
//! - [`Closing`] runs a dilation sweep, then an erosion sweep
//!
//! Each sweep collects one candidate per mask slot and per channel;
//! slots outside the structuring element are filled with a value that
//! cannot win the selection (0 for max, 255 for min). The composite
//! filters report progress from 0 for each of their two sweeps and honor
//! cancellation in both.

use crate::StructuringElement;
use rasterlab_core::{Control, Filter, Outcome, Raster, Rgb};

/// Order statistic a rank sweep selects after a descending sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    /// First element: the neighborhood maximum
    Max,
    /// Last element: the neighborhood minimum
    Min,
}

impl Pick {
    /// Fill value for slots outside the structuring element; loses every
    /// comparison for this selection.
    fn fill(self) -> u8 {
        match self {
            Pick::Max => 0,
            Pick::Min => 255,
        }
    }
}

fn rank_pixel(source: &Raster, x: u32, y: u32, sel: &StructuringElement, pick: Pick) -> Rgb {
    let r = sel.radius() as i64;
    let fill = pick.fill();
    let mut reds = Vec::with_capacity(sel.window());
    let mut greens = Vec::with_capacity(sel.window());
    let mut blues = Vec::with_capacity(sel.window());

    for dy in -r..=r {
        for dx in -r..=r {
            let mx = (dx + r) as u32;
            let my = (dy + r) as u32;
            if sel.is_hit(mx, my) {
                let px = source.get_clamped(x as i64 + dx, y as i64 + dy);
                reds.push(px.r);
                greens.push(px.g);
                blues.push(px.b);
            } else {
                reds.push(fill);
                greens.push(fill);
                blues.push(fill);
            }
        }
    }

    let select = |mut vals: Vec<u8>| -> u8 {
        vals.sort_unstable_by(|a, b| b.cmp(a));
        match pick {
            Pick::Max => vals[0],
            Pick::Min => vals[vals.len() - 1],
        }
    };

    Rgb::new(select(reds), select(greens), select(blues))
}

/// Channel-wise dilation: neighborhood maximum over the structuring
/// element.
#[derive(Debug, Clone)]
pub struct Dilation {
    sel: StructuringElement,
}

impl Dilation {
    /// Dilation over the standard 3x3 cross.
    pub fn new() -> Self {
        Dilation::with_element(StructuringElement::cross())
    }

    /// Dilation over a custom structuring element.
    pub fn with_element(sel: StructuringElement) -> Self {
        Dilation { sel }
    }
}

impl Default for Dilation {
    fn default() -> Self {
        Dilation::new()
    }
}

impl Filter for Dilation {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        rank_pixel(source, x, y, &self.sel, Pick::Max)
    }
}

/// Channel-wise erosion: neighborhood minimum over the structuring
/// element.
#[derive(Debug, Clone)]
pub struct Erosion {
    sel: StructuringElement,
}

impl Erosion {
    /// Erosion over the standard 3x3 cross.
    pub fn new() -> Self {
        Erosion::with_element(StructuringElement::cross())
    }

    /// Erosion over a custom structuring element.
    pub fn with_element(sel: StructuringElement) -> Self {
        Erosion { sel }
    }
}

impl Default for Erosion {
    fn default() -> Self {
        Erosion::new()
    }
}

impl Filter for Erosion {
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        rank_pixel(source, x, y, &self.sel, Pick::Min)
    }
}

/// Opening: erosion followed by dilation of the eroded result.
///
/// Removes small bright features. Equal to `Dilation(Erosion(I))` by
/// construction.
#[derive(Debug, Clone)]
pub struct Opening {
    erosion: Erosion,
    dilation: Dilation,
}

impl Opening {
    /// Opening over the standard 3x3 cross.
    pub fn new() -> Self {
        Opening::with_element(StructuringElement::cross())
    }

    /// Opening over a custom structuring element (used for both sweeps).
    pub fn with_element(sel: StructuringElement) -> Self {
        Opening {
            erosion: Erosion::with_element(sel.clone()),
            dilation: Dilation::with_element(sel),
        }
    }
}

impl Default for Opening {
    fn default() -> Self {
        Opening::new()
    }
}

impl Filter for Opening {
    /// First-sweep (erosion) pixel function.
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        self.erosion.compute_pixel(source, x, y)
    }

    fn process(&mut self, source: &Raster, ctl: &mut dyn Control) -> Outcome {
        let eroded = match self.erosion.process(source, ctl) {
            Outcome::Completed(raster) => raster,
            Outcome::Cancelled => return Outcome::Cancelled,
        };
        self.dilation.process(&eroded, ctl)
    }
}

/// Closing: dilation followed by erosion of the dilated result.
///
/// Fills small dark features. Equal to `Erosion(Dilation(I))` by
/// construction.
#[derive(Debug, Clone)]
pub struct Closing {
    dilation: Dilation,
    erosion: Erosion,
}

impl Closing {
    /// Closing over the standard 3x3 cross.
    pub fn new() -> Self {
        Closing::with_element(StructuringElement::cross())
    }

    /// Closing over a custom structuring element (used for both sweeps).
    pub fn with_element(sel: StructuringElement) -> Self {
        Closing {
            dilation: Dilation::with_element(sel.clone()),
            erosion: Erosion::with_element(sel),
        }
    }
}

impl Default for Closing {
    fn default() -> Self {
        Closing::new()
    }
}

impl Filter for Closing {
    /// First-sweep (dilation) pixel function.
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb {
        self.dilation.compute_pixel(source, x, y)
    }

    fn process(&mut self, source: &Raster, ctl: &mut dyn Control) -> Outcome {
        let dilated = match self.dilation.process(source, ctl) {
            Outcome::Completed(raster) => raster,
            Outcome::Cancelled => return Outcome::Cancelled,
        };
        self.erosion.process(&dilated, ctl)
    }
}
