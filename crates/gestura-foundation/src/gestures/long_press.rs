use gestura_core::{TaskRegistration, UiScheduler};
use gestura_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Fires once a press stays put for the long-press timeout.
///
/// Used by adapters whose toolkit does not report long presses itself.
/// After firing, [`has_fired`](Self::has_fired) stays true until the next
/// [`arm`](Self::arm) so the release can be told apart from a tap.
pub struct LongPressDetector {
    scheduler: UiScheduler,
    timeout_ms: u64,
    pending: Option<TaskRegistration>,
    fired: Rc<Cell<bool>>,
    on_long_press: Rc<dyn Fn(Point)>,
}

impl LongPressDetector {
    pub fn new(
        scheduler: UiScheduler,
        timeout_ms: u64,
        on_long_press: impl Fn(Point) + 'static,
    ) -> Self {
        Self {
            scheduler,
            timeout_ms,
            pending: None,
            fired: Rc::new(Cell::new(false)),
            on_long_press: Rc::new(on_long_press),
        }
    }

    pub fn arm(&mut self, touch: Point) {
        self.disarm();
        self.fired.set(false);

        let fired = Rc::clone(&self.fired);
        let on_long_press = Rc::clone(&self.on_long_press);
        self.pending = Some(self.scheduler.post_delayed(self.timeout_ms, move || {
            fired.set(true);
            on_long_press(touch);
        }));
    }

    /// Stops the timer. Does not clear [`has_fired`](Self::has_fired).
    pub fn disarm(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, TaskRegistration::is_pending)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    pub fn reset(&mut self) {
        self.disarm();
        self.fired.set(false);
    }
}
