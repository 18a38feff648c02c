//! Single tap versus double tap.
//!
//! A single-tap candidate is held back for a debounce window. Every
//! candidate and every confirmed double tap bumps a generation counter, and
//! the deferred check only delivers when its generation is still current,
//! so a double tap that lands while the check is already queued still
//! suppresses it.

use crate::events::TapEvent;
use gestura_core::{TaskRegistration, UiScheduler};
use std::cell::Cell;
use std::rc::Rc;

/// How an adapter's toolkit reports single taps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapConfirmation {
    /// The toolkit reports every tap, including both halves of a double
    /// tap. Single taps go through the debounce race.
    Debounced,
    /// The toolkit already withholds single taps that turn into double
    /// taps. Single taps are delivered directly.
    PlatformConfirmed,
}

pub struct TapDisambiguator {
    scheduler: UiScheduler,
    window_ms: u64,
    generation: Rc<Cell<u64>>,
    pending: Option<TaskRegistration>,
    absorb_until_ms: Option<u64>,
    on_tap: Rc<dyn Fn(TapEvent)>,
}

impl TapDisambiguator {
    /// `on_tap` runs from the scheduler once a candidate survives the window.
    pub fn new(scheduler: UiScheduler, window_ms: u64, on_tap: impl Fn(TapEvent) + 'static) -> Self {
        Self {
            scheduler,
            window_ms,
            generation: Rc::new(Cell::new(0)),
            pending: None,
            absorb_until_ms: None,
            on_tap: Rc::new(on_tap),
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn set_window_ms(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
    }

    /// Starts a new race for `event`, replacing any race in flight.
    ///
    /// Returns false when the candidate is the trailing half of a double tap
    /// that was already confirmed, in which case nothing is scheduled.
    pub fn on_single_tap_candidate(&mut self, event: TapEvent) -> bool {
        if let Some(until) = self.absorb_until_ms {
            if self.scheduler.now_ms() < until {
                log::trace!("tap candidate at {:?} absorbed by double tap", event.touch);
                return false;
            }
            self.absorb_until_ms = None;
        }

        let generation = self.bump_generation();
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        let current = Rc::clone(&self.generation);
        let on_tap = Rc::clone(&self.on_tap);
        self.pending = Some(self.scheduler.post_delayed(self.window_ms, move || {
            if current.get() == generation {
                on_tap(event);
            } else {
                log::trace!("stale tap check {generation} skipped");
            }
        }));
        true
    }

    /// Ends the race in favour of a double tap and returns the event to
    /// deliver on the double-tap channel.
    pub fn on_double_tap_confirmed(&mut self, event: TapEvent) -> TapEvent {
        self.bump_generation();
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.absorb_until_ms = Some(self.scheduler.now_ms().saturating_add(self.window_ms));
        log::debug!("double tap confirmed at {:?}", event.touch);
        event
    }

    /// Direct path for toolkits with [`TapConfirmation::PlatformConfirmed`].
    pub fn on_single_tap_confirmed(&mut self, event: TapEvent) -> TapEvent {
        self.bump_generation();
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        event
    }

    pub fn has_pending_tap(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, TaskRegistration::is_pending)
    }

    /// Cancels everything in flight; no tap from an earlier race can fire.
    pub fn reset(&mut self) {
        self.bump_generation();
        self.pending = None;
        self.absorb_until_ms = None;
    }

    fn bump_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

#[cfg(test)]
#[path = "tests/tap_tests.rs"]
mod tests;
