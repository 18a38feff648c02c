//! Test rule owning a virtual clock and a view hierarchy.

use gestura_behavior::{GestureBehavior, GestureConfig, PlatformAdapter, ViewId, ViewRegistry};
use gestura_core::UiScheduler;
use gestura_foundation::PointerEvent;
use gestura_graphics::Rect;
use std::rc::Rc;

const MAX_IDLE_ROUNDS: usize = 64;

/// Drives behaviors against a scheduler whose clock only moves when the
/// test says so.
///
/// Timers armed by the engine (tap debounce, long press) fire from
/// [`GestureTestRule::advance_time`] and [`GestureTestRule::wait_for_idle`].
pub struct GestureTestRule<A: PlatformAdapter> {
    scheduler: UiScheduler,
    registry: Rc<ViewRegistry<A>>,
}

impl<A: PlatformAdapter> GestureTestRule<A> {
    pub fn new() -> Self {
        Self {
            scheduler: UiScheduler::new(),
            registry: ViewRegistry::new(),
        }
    }

    pub fn scheduler(&self) -> &UiScheduler {
        &self.scheduler
    }

    pub fn registry(&self) -> &Rc<ViewRegistry<A>> {
        &self.registry
    }

    pub fn add_root(&self, bounds: Rect) -> ViewId {
        self.registry.add_root(bounds)
    }

    /// # Panics
    ///
    /// Panics if `parent` is not part of the hierarchy.
    pub fn add_child(&self, parent: ViewId, bounds: Rect) -> ViewId {
        match self.registry.add_child(parent, bounds) {
            Some(view) => view,
            None => panic!("parent {:?} is not in the hierarchy", parent),
        }
    }

    /// Creates a behavior on this rule's scheduler and attaches it to `view`.
    ///
    /// # Panics
    ///
    /// Panics if `view` is not part of the hierarchy.
    pub fn behavior(&self, view: ViewId, adapter: A, config: GestureConfig) -> GestureBehavior<A> {
        let behavior = GestureBehavior::new(adapter, self.scheduler.clone(), config);
        assert!(
            self.registry.attach(view, &behavior),
            "view {:?} is not in the hierarchy",
            view
        );
        behavior
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Moves the clock forward, running every task that falls due.
    pub fn advance_time(&self, millis: u64) -> usize {
        self.scheduler.advance_by(millis)
    }

    pub fn advance_to(&self, now_ms: u64) -> usize {
        self.scheduler.advance_to(now_ms)
    }

    /// Runs pending tasks until none are left, jumping the clock to each
    /// deadline in turn. Returns the number of tasks run.
    ///
    /// Gives up after a fixed number of rounds so a task that keeps
    /// rescheduling itself cannot hang the test.
    pub fn wait_for_idle(&self) -> usize {
        let mut ran = 0;
        for _ in 0..MAX_IDLE_ROUNDS {
            match self.scheduler.next_deadline() {
                Some(deadline) => ran += self.scheduler.advance_to(deadline),
                None => break,
            }
        }
        ran
    }
}

impl<A: PlatformAdapter<RawEvent = PointerEvent>> GestureTestRule<A> {
    /// Feeds `events` in order, first moving the clock to each event's
    /// timestamp so timers fire where they would in real time.
    pub fn replay(&self, behavior: &GestureBehavior<A>, events: &[PointerEvent]) {
        for event in events {
            self.scheduler.advance_to(event.time_ms);
            behavior.ingest(event);
        }
    }
}

impl<A: PlatformAdapter> Default for GestureTestRule<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/rule_tests.rs"]
mod tests;
