//! The filter engine
//!
//! A filter is anything that can compute one destination pixel from a
//! source raster ([`Filter::compute_pixel`]). The engine drives that
//! function over the whole image with the column sweep in [`sweep`]:
//! one progress report and one cancellation poll per column, rows filled
//! inside. Filters that need a whole-image precompute pass (histogram,
//! channel averages) or a second sweep (opening, closing) override
//! [`Filter::process`] and call [`sweep`] themselves.
//!
//! # Cancellation
//!
//! Cancellation is cooperative and is not an error: the driver polls the
//! caller's [`Control`] once per column and, when requested, abandons
//! the destination and returns [`Outcome::Cancelled`]. A partial raster
//! is never handed out. Column granularity bounds the worst-case
//! response latency to one column's height while keeping poll overhead
//! negligible.
//!
//! # Scheduling
//!
//! The engine does not spawn threads. The caller decides where a pass
//! runs; a background worker typically shares a [`CancelFlag`] with the
//! UI side and forwards progress through a [`CallbackControl`].

use crate::{Raster, RasterMut, Rgb};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Progress sink and cancellation poll for one filter run.
///
/// Owned by the caller driving the run; the engine only reports and
/// polls through it and never stores it beyond the call.
pub trait Control {
    /// Receive a progress update, a percentage in [0, 100].
    ///
    /// Non-decreasing within one sweep; a multi-sweep filter restarts
    /// at 0 for each sweep.
    fn report_progress(&mut self, percent: u32);

    /// Poll whether the caller has requested cancellation.
    fn cancel_requested(&self) -> bool;
}

/// A control that discards progress and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unattended;

impl Control for Unattended {
    fn report_progress(&mut self, _percent: u32) {}

    fn cancel_requested(&self) -> bool {
        false
    }
}

/// A control built from a progress closure and a cancellation closure.
///
/// This is the raw boundary contract:
/// `process(image, on_progress, is_cancelled)`.
pub struct CallbackControl<P, C>
where
    P: FnMut(u32),
    C: Fn() -> bool,
{
    on_progress: P,
    is_cancelled: C,
}

impl<P, C> CallbackControl<P, C>
where
    P: FnMut(u32),
    C: Fn() -> bool,
{
    /// Wrap a progress sink and a cancellation poll.
    pub fn new(on_progress: P, is_cancelled: C) -> Self {
        CallbackControl {
            on_progress,
            is_cancelled,
        }
    }
}

impl<P, C> Control for CallbackControl<P, C>
where
    P: FnMut(u32),
    C: Fn() -> bool,
{
    fn report_progress(&mut self, percent: u32) {
        (self.on_progress)(percent)
    }

    fn cancel_requested(&self) -> bool {
        (self.is_cancelled)()
    }
}

/// Cloneable cancellation token.
///
/// The caller keeps one clone and hands another to the worker running
/// the pass. Calling [`CancelFlag::cancel`] from any thread makes the
/// next column poll observe the request. Used directly as a [`Control`]
/// it discards progress; pair it with [`CallbackControl`] when progress
/// matters.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a token with no cancellation requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Control for CancelFlag {
    fn report_progress(&mut self, _percent: u32) {}

    fn cancel_requested(&self) -> bool {
        self.is_cancelled()
    }
}

/// The result of a filter run.
///
/// Cancellation is an expected outcome, distinct from completion; there
/// is no error case.
#[derive(Debug)]
#[must_use]
pub enum Outcome {
    /// The pass ran to completion; the destination raster has the same
    /// dimensions as the source.
    Completed(Raster),
    /// Cancellation was observed; no destination is produced.
    Cancelled,
}

impl Outcome {
    /// The completed raster, or `None` if the run was cancelled.
    pub fn into_raster(self) -> Option<Raster> {
        match self {
            Outcome::Completed(raster) => Some(raster),
            Outcome::Cancelled => None,
        }
    }

    /// Whether the run was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// A pixel transform driven over a raster by the engine.
pub trait Filter {
    /// Compute the destination pixel at (x, y).
    ///
    /// Must treat `source` as read-only. Takes `&mut self` because some
    /// filters carry per-instance state (an RNG, precomputed
    /// statistics); a filter instance is not safe to share across
    /// concurrent runs.
    fn compute_pixel(&mut self, source: &Raster, x: u32, y: u32) -> Rgb;

    /// Run the filter over `source`, producing a new raster of the same
    /// dimensions or [`Outcome::Cancelled`].
    fn process(&mut self, source: &Raster, ctl: &mut dyn Control) -> Outcome {
        sweep(&mut |s, x, y| self.compute_pixel(s, x, y), source, ctl)
    }
}

/// Drive one full column sweep of `compute` over `source`.
///
/// Reports `floor(100·x/W)` and polls for cancellation at the top of
/// each column; on cancellation the partially written destination is
/// dropped.
pub fn sweep(
    compute: &mut dyn FnMut(&Raster, u32, u32) -> Rgb,
    source: &Raster,
    ctl: &mut dyn Control,
) -> Outcome {
    let w = source.width();
    let h = source.height();
    let mut dest = RasterMut::matching(source);

    for x in 0..w {
        ctl.report_progress((x as u64 * 100 / w as u64) as u32);
        if ctl.cancel_requested() {
            return Outcome::Cancelled;
        }
        for y in 0..h {
            dest.set_unchecked(x, y, compute(source, x, y));
        }
    }

    Outcome::Completed(dest.into())
}
