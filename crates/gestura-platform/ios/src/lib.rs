//! UIKit adapter for Gestura
//!
//! One tap, one double-tap, one pan and one long-press recognizer are
//! installed on the view; the host forwards their action callbacks here.
//! UIKit already reports points, so no density conversion happens.

use gestura_behavior::{GestureEngine, PlatformAdapter};
use gestura_foundation::{GestureStatus, MotionSample, TapConfirmation, TouchSet};
use gestura_graphics::{Point, Vector};
use std::rc::Rc;

/// `UIGestureRecognizer.State`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerState {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl RecognizerState {
    pub fn to_gesture_status(self) -> GestureStatus {
        match self {
            RecognizerState::Began => GestureStatus::Started,
            RecognizerState::Changed => GestureStatus::Running,
            RecognizerState::Ended => GestureStatus::Completed,
            _ => GestureStatus::Canceled,
        }
    }
}

/// A pan recognizer callback: cumulative translation since the gesture
/// began and the current velocity, both in the view's coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub struct PanUpdate {
    pub state: RecognizerState,
    pub translation: Vector,
    pub velocity: Vector,
    pub touches: TouchSet,
    pub time_ms: u64,
}

impl PanUpdate {
    pub fn new(state: RecognizerState, translation: Vector, time_ms: u64) -> Self {
        Self {
            state,
            translation,
            velocity: Vector::ZERO,
            touches: TouchSet::new(),
            time_ms,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_touch(mut self, touch: Point) -> Self {
        self.touches.push(touch);
        self
    }

    fn sample(&self) -> MotionSample {
        MotionSample::tracking(self.translation.to_point(), self.touches.clone(), self.time_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiKitGesture {
    Tap { location: Point },
    DoubleTap { location: Point },
    LongPress { state: RecognizerState, location: Point },
    Pan(PanUpdate),
}

/// Pan distances are taken from the recognizer's translation, so a pan
/// step is the change in translation since the previous callback.
#[derive(Debug, Default)]
pub struct UiKitAdapter;

impl UiKitAdapter {
    pub fn new() -> Self {
        Self
    }

    fn pan(&self, update: &PanUpdate, engine: &GestureEngine) {
        // Still recognizing: nothing has happened yet.
        if update.state == RecognizerState::Possible {
            return;
        }
        match update.state.to_gesture_status() {
            GestureStatus::Started => {
                if engine.is_panning() {
                    log::warn!("pan began twice; dropping the stale gesture");
                    engine.pan_cancel(None);
                }
                self.start(update, engine);
            }
            GestureStatus::Running if !engine.is_panning() => self.start(update, engine),
            GestureStatus::Running => engine.pan_move(&update.sample()),
            GestureStatus::Completed => {
                engine.pan_release(&update.sample(), Some(update.velocity));
            }
            GestureStatus::Canceled => engine.pan_cancel(Some(&update.sample())),
        }
    }

    /// Translation starts at zero, so the first step carries everything
    /// the recognizer accumulated before it began.
    fn start(&self, update: &PanUpdate, engine: &GestureEngine) {
        let origin = MotionSample::tracking(Point::ZERO, update.touches.clone(), update.time_ms);
        engine.pan_press(&origin);
        engine.pan_move(&update.sample());
    }
}

impl PlatformAdapter for UiKitAdapter {
    type RawEvent = UiKitGesture;

    fn ingest(&mut self, event: &UiKitGesture, engine: &Rc<GestureEngine>) {
        match event {
            UiKitGesture::Tap { location } => engine.tap(*location, self.tap_confirmation()),
            UiKitGesture::DoubleTap { location } => engine.double_tap(*location),
            UiKitGesture::LongPress { state, location } => {
                if state.to_gesture_status() == GestureStatus::Started {
                    engine.long_press(*location);
                }
            }
            UiKitGesture::Pan(update) => self.pan(update, engine),
        }
    }

    fn tap_confirmation(&self) -> TapConfirmation {
        TapConfirmation::Debounced
    }
}
