//! Android adapter for Gestura
//!
//! Models the callbacks of a `GestureDetector.SimpleOnGestureListener`
//! plus the raw `View.OnTouchListener` stream the detector is fed from.
//! The host forwards the detector callbacks first and the raw touch last,
//! the order in which Android delivers them for one `MotionEvent`.

mod motion_event;

pub use motion_event::{MotionAction, MotionEvent};

use gestura_behavior::{GestureEngine, PlatformAdapter};
use gestura_foundation::{GestureStatus, MotionSample, TapConfirmation, ViewConfiguration};
use gestura_graphics::{Density, Point, Vector};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum AndroidGesture {
    /// Raw touch stream, delivered after the detector saw the same event.
    Touch(MotionEvent),
    SingleTapConfirmed(MotionEvent),
    DoubleTap(MotionEvent),
    LongPress(MotionEvent),
    /// `onScroll(e1, e2, distanceX, distanceY)`. The distances are in
    /// pixels and point from `current` back to the previous event.
    Scroll {
        down: Option<MotionEvent>,
        current: MotionEvent,
        distance_x: f32,
        distance_y: f32,
    },
    /// `onFling(e1, e2, velocityX, velocityY)`, velocities in pixels per second.
    Fling {
        down: Option<MotionEvent>,
        current: MotionEvent,
        velocity_x: f32,
        velocity_y: f32,
    },
}

pub struct AndroidAdapter {
    density: Density,
    view_configuration: ViewConfiguration,
    /// Focal point of the scroll in progress, advanced by the detector's
    /// scroll distances.
    focus: Option<Point>,
}

impl AndroidAdapter {
    /// `scaled` carries the device's `ViewConfiguration` in pixels, as
    /// returned by `ViewConfiguration.get(context)`.
    pub fn new(density: f32, scaled: ViewConfiguration) -> Self {
        Self {
            density: Density::new(density),
            view_configuration: scaled,
            focus: None,
        }
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Maximum fling velocity in logical units per second.
    pub fn max_fling_velocity(&self) -> f32 {
        self.density.to_logical(self.view_configuration.max_fling_velocity)
    }

    fn scroll(
        &mut self,
        down: Option<&MotionEvent>,
        current: &MotionEvent,
        distance: Vector,
        engine: &GestureEngine,
    ) {
        let Some(down) = down else {
            log::trace!("scroll without a down event ignored");
            return;
        };
        if !engine.is_panning() {
            let origin = down.to_sample(self.density);
            self.focus = Some(origin.position);
            engine.pan_press(&origin);
        }

        // `onScroll` distances point from the current event back to the
        // previous one.
        let step = self.density.vector_from_px(-distance.x, -distance.y);
        let focus = self
            .focus
            .unwrap_or_else(|| down.to_sample(self.density).position)
            + step;
        self.focus = Some(focus);
        let sample = MotionSample::tracking(
            focus,
            current.touches(self.density),
            current.event_time_ms,
        );

        match current.action.to_gesture_status() {
            GestureStatus::Canceled => {
                self.focus = None;
                engine.pan_cancel(Some(&sample));
            }
            // An `Up` still moves; the release comes from `onFling` or the
            // raw touch.
            _ => engine.pan_move(&sample),
        }
    }

    fn fling(
        &mut self,
        down: Option<&MotionEvent>,
        current: &MotionEvent,
        velocity: Vector,
        engine: &GestureEngine,
    ) {
        if !engine.is_panning() {
            // A fling can arrive without a scroll for very short strokes.
            match down {
                Some(down) => engine.pan_begin(&down.to_sample(self.density)),
                None => {
                    log::trace!("fling without a gesture in progress ignored");
                    return;
                }
            }
        }
        self.focus = None;
        let velocity = self.density.vector_from_px(velocity.x, velocity.y);
        engine.pan_release(&current.to_sample(self.density), Some(velocity));
    }

    fn touch(&mut self, event: &MotionEvent, engine: &GestureEngine) {
        if !event.action.is_primary() {
            log::trace!("{:?} does not affect the pan", event.action);
            return;
        }
        match event.action.to_gesture_status() {
            GestureStatus::Started => {
                self.focus = None;
                engine.pan_press(&event.to_sample(self.density));
            }
            // Moves reach the pan through `onScroll`.
            GestureStatus::Running => {}
            // Still panning after the detector handled the up: no fling, so
            // the release speed was below the detector's minimum.
            GestureStatus::Completed if engine.is_panning() => {
                self.focus = None;
                engine.pan_release(&event.to_sample(self.density), Some(Vector::ZERO));
            }
            GestureStatus::Canceled if engine.is_panning() => {
                self.focus = None;
                engine.pan_cancel(Some(&event.to_sample(self.density)));
            }
            GestureStatus::Completed | GestureStatus::Canceled => self.focus = None,
        }
    }
}

impl Default for AndroidAdapter {
    fn default() -> Self {
        Self::new(1.0, ViewConfiguration::default())
    }
}

impl PlatformAdapter for AndroidAdapter {
    type RawEvent = AndroidGesture;

    fn ingest(&mut self, event: &AndroidGesture, engine: &Rc<GestureEngine>) {
        match event {
            AndroidGesture::Touch(event) => self.touch(event, engine),
            AndroidGesture::SingleTapConfirmed(event) => {
                engine.tap(event.position(self.density), self.tap_confirmation());
            }
            AndroidGesture::DoubleTap(event) => engine.double_tap(event.position(self.density)),
            AndroidGesture::LongPress(event) => engine.long_press(event.position(self.density)),
            AndroidGesture::Scroll {
                down,
                current,
                distance_x,
                distance_y,
            } => self.scroll(
                down.as_ref(),
                current,
                Vector::new(*distance_x, *distance_y),
                engine,
            ),
            AndroidGesture::Fling {
                down,
                current,
                velocity_x,
                velocity_y,
            } => self.fling(
                down.as_ref(),
                current,
                Vector::new(*velocity_x, *velocity_y),
                engine,
            ),
        }
    }

    fn tap_confirmation(&self) -> TapConfirmation {
        TapConfirmation::PlatformConfirmed
    }

    fn reset(&mut self) {
        self.focus = None;
    }

    fn on_attach(&mut self, engine: &Rc<GestureEngine>) {
        engine.set_max_fling_velocity(self.max_fling_velocity());
        log::debug!(
            "android adapter attached: density {}, max fling {}",
            self.density.factor(),
            self.max_fling_velocity()
        );
    }
}
