//! Classifiers and outbound channels of one behavior.
//!
//! Adapters translate native callbacks into calls on [`GestureEngine`]; the
//! engine runs the shared classifiers, stamps every payload with the view
//! rectangle measured at that moment, and delivers it on one of five
//! channels. No `RefCell` borrow is held while subscribers run.

use crate::config::GestureConfig;
use crate::view_tree::{ViewId, ViewTree};
use gestura_core::{EventChannel, UiScheduler};
use gestura_foundation::gesture_constants::MAX_FLING_VELOCITY;
use gestura_foundation::{
    LongPressEvent, MotionOutcome, MotionSample, PanEvent, PanSwipeClassifier, SwipeEvent,
    TapConfirmation, TapDisambiguator, TapEvent,
};
use gestura_graphics::{Point, Rect, Vector};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct ViewBinding {
    view: ViewId,
    tree: Weak<dyn ViewTree>,
}

pub struct GestureEngine {
    taps: EventChannel<TapEvent>,
    double_taps: EventChannel<TapEvent>,
    long_presses: EventChannel<LongPressEvent>,
    pans: EventChannel<PanEvent>,
    swipes: EventChannel<SwipeEvent>,
    tap_race: RefCell<TapDisambiguator>,
    motion: RefCell<PanSwipeClassifier>,
    scheduler: UiScheduler,
    config: Cell<GestureConfig>,
    max_fling_velocity: Cell<f32>,
    binding: RefCell<Option<ViewBinding>>,
}

impl GestureEngine {
    pub fn new(scheduler: UiScheduler, config: GestureConfig) -> Rc<Self> {
        Rc::new_cyclic(|engine: &Weak<GestureEngine>| {
            let engine = engine.clone();
            let tap_race = TapDisambiguator::new(scheduler.clone(), config.tap_debounce_ms, move |event| {
                if let Some(engine) = engine.upgrade() {
                    log::trace!("tap delivered at {:?}", event.touch);
                    engine.taps.emit(&event);
                }
            });
            Self {
                taps: EventChannel::new(),
                double_taps: EventChannel::new(),
                long_presses: EventChannel::new(),
                pans: EventChannel::new(),
                swipes: EventChannel::new(),
                tap_race: RefCell::new(tap_race),
                motion: RefCell::new(PanSwipeClassifier::default()),
                scheduler,
                config: Cell::new(config),
                max_fling_velocity: Cell::new(MAX_FLING_VELOCITY),
                binding: RefCell::new(None),
            }
        })
    }

    pub fn taps(&self) -> &EventChannel<TapEvent> {
        &self.taps
    }

    pub fn double_taps(&self) -> &EventChannel<TapEvent> {
        &self.double_taps
    }

    pub fn long_presses(&self) -> &EventChannel<LongPressEvent> {
        &self.long_presses
    }

    pub fn pans(&self) -> &EventChannel<PanEvent> {
        &self.pans
    }

    pub fn swipes(&self) -> &EventChannel<SwipeEvent> {
        &self.swipes
    }

    pub fn scheduler(&self) -> &UiScheduler {
        &self.scheduler
    }

    pub fn config(&self) -> GestureConfig {
        self.config.get()
    }

    pub fn set_config(&self, config: GestureConfig) {
        self.config.set(config);
        self.tap_race.borrow_mut().set_window_ms(config.tap_debounce_ms);
    }

    /// Reference velocity for ratio-based swipe thresholds and cap for the
    /// velocity estimate, e.g. a device's scaled maximum fling velocity.
    pub fn set_max_fling_velocity(&self, max_fling_velocity: f32) {
        if max_fling_velocity.is_finite() && max_fling_velocity > 0.0 {
            self.max_fling_velocity.set(max_fling_velocity);
            self.motion.borrow_mut().set_max_velocity(max_fling_velocity);
        } else {
            log::warn!("ignoring max fling velocity {max_fling_velocity}");
        }
    }

    pub fn max_fling_velocity(&self) -> f32 {
        self.max_fling_velocity.get()
    }

    pub(crate) fn bind(&self, view: ViewId, tree: Weak<dyn ViewTree>) {
        *self.binding.borrow_mut() = Some(ViewBinding { view, tree });
    }

    /// Drops the view reference and everything in flight.
    pub(crate) fn unbind(&self) {
        self.binding.borrow_mut().take();
        self.reset();
    }

    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_some()
    }

    /// Cancels the tap race and forgets any gesture in progress without
    /// emitting anything.
    pub fn reset(&self) {
        self.tap_race.borrow_mut().reset();
        self.motion.borrow_mut().reset();
    }

    /// Current rectangle of the bound view, or [`Rect::ZERO`] when the view
    /// is detached or no longer known to its tree.
    pub fn view_rect(&self) -> Rect {
        let bounds = match &*self.binding.borrow() {
            Some(binding) => binding
                .tree
                .upgrade()
                .and_then(|tree| tree.bounds(binding.view)),
            None => None,
        };
        bounds.unwrap_or(Rect::ZERO)
    }

    /// Reports a tap using the confirmation strategy of the calling adapter.
    pub fn tap(&self, touch: Point, confirmation: TapConfirmation) {
        match confirmation {
            TapConfirmation::Debounced => self.single_tap_candidate(touch),
            TapConfirmation::PlatformConfirmed => self.single_tap_confirmed(touch),
        }
    }

    /// Enters a tap into the debounce race. Delivery, if any, happens later
    /// from the scheduler.
    pub fn single_tap_candidate(&self, touch: Point) {
        let event = TapEvent::new(touch, self.view_rect());
        self.tap_race.borrow_mut().on_single_tap_candidate(event);
    }

    pub fn single_tap_confirmed(&self, touch: Point) {
        let event = TapEvent::new(touch, self.view_rect());
        let event = self.tap_race.borrow_mut().on_single_tap_confirmed(event);
        self.taps.emit(&event);
    }

    pub fn double_tap(&self, touch: Point) {
        let event = TapEvent::new(touch, self.view_rect());
        let event = self.tap_race.borrow_mut().on_double_tap_confirmed(event);
        self.double_taps.emit(&event);
    }

    pub fn has_pending_tap(&self) -> bool {
        self.tap_race.borrow().has_pending_tap()
    }

    pub fn long_press(&self, touch: Point) {
        let event = LongPressEvent::new(touch, self.view_rect());
        self.long_presses.emit(&event);
    }

    pub fn is_panning(&self) -> bool {
        self.motion.borrow().is_active()
    }

    pub fn pan_press(&self, sample: &MotionSample) {
        self.motion.borrow_mut().press(sample);
    }

    pub fn pan_begin(&self, sample: &MotionSample) {
        let rect = self.view_rect();
        let started = self.motion.borrow_mut().begin(sample, rect);
        if let Some(event) = started {
            self.pans.emit(&event);
        }
    }

    pub fn pan_move(&self, sample: &MotionSample) {
        let rect = self.view_rect();
        let event = self.motion.borrow_mut().update(sample, rect);
        self.pans.emit(&event);
    }

    /// Ends the current pan, as a swipe when fast enough and observed.
    pub fn pan_release(&self, sample: &MotionSample, platform_velocity: Option<Vector>) {
        let rect = self.view_rect();
        let threshold = self
            .config
            .get()
            .resolve_swipe_threshold(self.max_fling_velocity.get());
        let swipe_enabled = self.swipes.has_subscribers();

        let outcomes = {
            let mut motion = self.motion.borrow_mut();
            motion.set_threshold(threshold);
            motion.release(sample, platform_velocity, swipe_enabled, rect)
        };
        for outcome in &outcomes {
            match outcome {
                MotionOutcome::Pan(event) => {
                    self.pans.emit(event);
                }
                MotionOutcome::Swipe(event) => {
                    self.swipes.emit(event);
                }
            }
        }
    }

    pub fn pan_cancel(&self, sample: Option<&MotionSample>) {
        let rect = self.view_rect();
        let canceled = self.motion.borrow_mut().cancel(sample, rect);
        if let Some(event) = canceled {
            self.pans.emit(&event);
        }
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
