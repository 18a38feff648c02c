//! Pan accumulation and the pan-or-swipe decision at release.
//!
//! Distances are measured on the sample's tracking position. Each emitted
//! pan step carries the movement since the previous step, so the steps of a
//! gesture add up to its total displacement. At release the classifier
//! estimates the release velocity and ends the gesture either with
//! `Pan(Completed)` or, when the release is fast enough and someone listens
//! for swipes, with `Pan(Canceled)` followed by a `Swipe`.

use super::direction::Direction;
use super::status::{GestureLifecycle, GestureStatus};
use super::swipe::SwipeThreshold;
use crate::events::{PanEvent, SwipeEvent, TouchSet};
use crate::gesture_constants::MAX_FLING_VELOCITY;
use crate::input::MotionSample;
use crate::velocity_tracker::VelocityTracker;
use gestura_graphics::{Point, Rect, Vector};
use smallvec::SmallVec;

/// One event produced by the classifier.
#[derive(Clone, Debug, PartialEq)]
pub enum MotionOutcome {
    Pan(PanEvent),
    Swipe(SwipeEvent),
}

impl MotionOutcome {
    pub fn as_pan(&self) -> Option<&PanEvent> {
        match self {
            MotionOutcome::Pan(event) => Some(event),
            MotionOutcome::Swipe(_) => None,
        }
    }

    pub fn as_swipe(&self) -> Option<&SwipeEvent> {
        match self {
            MotionOutcome::Swipe(event) => Some(event),
            MotionOutcome::Pan(_) => None,
        }
    }
}

pub type MotionOutcomes = SmallVec<[MotionOutcome; 2]>;

#[derive(Clone, Copy, Debug)]
struct Anchor {
    position: Point,
    time_ms: u64,
}

impl Anchor {
    fn of(sample: &MotionSample) -> Self {
        Self {
            position: sample.position,
            time_ms: sample.time_ms,
        }
    }
}

pub struct PanSwipeClassifier {
    threshold: SwipeThreshold,
    max_velocity: f32,
    lifecycle: GestureLifecycle,
    /// Tracking position where the current gesture started.
    start: Option<Point>,
    /// Last accepted sample, or the press when no movement happened yet.
    previous: Option<Anchor>,
    last_touches: TouchSet,
    segment_velocity: Vector,
    tracker: VelocityTracker,
}

impl Default for PanSwipeClassifier {
    fn default() -> Self {
        Self::new(SwipeThreshold::default())
    }
}

impl PanSwipeClassifier {
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            max_velocity: MAX_FLING_VELOCITY,
            lifecycle: GestureLifecycle::new(),
            start: None,
            previous: None,
            last_touches: TouchSet::new(),
            segment_velocity: Vector::ZERO,
            tracker: VelocityTracker::new(),
        }
    }

    /// Caps tracker estimates, e.g. to a device's scaled maximum fling speed.
    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        self.max_velocity = max_velocity;
    }

    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: SwipeThreshold) {
        self.threshold = threshold;
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Records the contact that may turn into a pan. The first movement
    /// sample will measure its distance from here.
    pub fn press(&mut self, sample: &MotionSample) {
        if self.is_active() {
            log::trace!("press at {}ms ignored while panning", sample.time_ms);
            return;
        }
        self.reset();
        self.previous = Some(Anchor::of(sample));
        self.last_touches = sample.touches.clone();
        self.tracker.add(sample.time_ms, sample.position);
    }

    /// Starts a gesture at `sample` with no movement yet. Returns `None` when
    /// a gesture is already running.
    pub fn begin(&mut self, sample: &MotionSample, view_rect: Rect) -> Option<PanEvent> {
        if self.is_active() {
            return None;
        }
        self.reset();
        let status = self.lifecycle.advance(GestureStatus::Started)?;
        self.start = Some(sample.position);
        self.accept(sample);
        Some(PanEvent::new(
            sample.touches.clone(),
            Vector::ZERO,
            Direction::Unknown,
            status,
            view_rect,
        ))
    }

    /// Feeds a movement sample. The first one of a gesture is `Started`.
    pub fn update(&mut self, sample: &MotionSample, view_rect: Rect) -> PanEvent {
        let anchor = self.previous.unwrap_or_else(|| Anchor::of(sample));
        let status = self
            .lifecycle
            .advance(GestureStatus::Running)
            .unwrap_or(GestureStatus::Running);
        if status == GestureStatus::Started {
            self.start = Some(anchor.position);
        }

        let distance = sample.position - anchor.position;
        self.note_segment(anchor, sample, distance);
        self.accept(sample);

        let direction = Direction::of_drag(distance);
        log::trace!("pan {status:?} {distance:?} -> {direction:?}");
        PanEvent::new(sample.touches.clone(), distance, direction, status, view_rect)
    }

    /// Ends the gesture at `sample`.
    ///
    /// `platform_velocity` (units per second) takes precedence over the
    /// internal estimate. A swipe is only produced when `swipe_enabled`.
    pub fn release(
        &mut self,
        sample: &MotionSample,
        platform_velocity: Option<Vector>,
        swipe_enabled: bool,
        view_rect: Rect,
    ) -> MotionOutcomes {
        let mut outcomes = MotionOutcomes::new();
        if !self.is_active() {
            self.reset();
            return outcomes;
        }

        let anchor = self.previous.unwrap_or_else(|| Anchor::of(sample));
        let remaining = sample.position - anchor.position;
        self.note_segment(anchor, sample, remaining);
        if sample.time_ms >= anchor.time_ms {
            self.tracker.add(sample.time_ms, sample.position);
        }

        let velocity = platform_velocity
            .filter(Vector::is_finite)
            .unwrap_or_else(|| self.estimated_velocity());
        let total = sample.position - self.start.unwrap_or(anchor.position);
        let touches = self.touches_of(sample);

        if swipe_enabled && self.threshold.is_swipe(velocity) {
            let direction = Direction::of_swipe(velocity);
            log::debug!("release at {velocity:?} is a swipe {direction:?}");
            outcomes.push(self.terminal(GestureStatus::Canceled, touches.clone(), remaining, view_rect));
            outcomes.push(MotionOutcome::Swipe(SwipeEvent::new(
                touches, total, velocity, direction, view_rect,
            )));
        } else {
            outcomes.push(self.terminal(GestureStatus::Completed, touches, remaining, view_rect));
        }

        self.reset();
        outcomes
    }

    /// Aborts the gesture. `sample`, when given, contributes its remaining
    /// movement; otherwise the canceled step carries zero distance.
    pub fn cancel(&mut self, sample: Option<&MotionSample>, view_rect: Rect) -> Option<PanEvent> {
        if !self.is_active() {
            self.reset();
            return None;
        }

        let (distance, touches) = match (sample, self.previous) {
            (Some(sample), Some(anchor)) => (sample.position - anchor.position, self.touches_of(sample)),
            (Some(sample), None) => (Vector::ZERO, self.touches_of(sample)),
            (None, _) => (Vector::ZERO, self.last_touches.clone()),
        };
        let outcome = self.terminal(GestureStatus::Canceled, touches, distance, view_rect);
        self.reset();
        match outcome {
            MotionOutcome::Pan(event) => Some(event),
            MotionOutcome::Swipe(_) => None,
        }
    }

    pub fn reset(&mut self) {
        self.lifecycle.reset();
        self.start = None;
        self.previous = None;
        self.last_touches.clear();
        self.segment_velocity = Vector::ZERO;
        self.tracker.reset();
    }

    fn terminal(
        &mut self,
        status: GestureStatus,
        touches: TouchSet,
        distance: Vector,
        view_rect: Rect,
    ) -> MotionOutcome {
        let status = self.lifecycle.advance(status).unwrap_or(status);
        MotionOutcome::Pan(PanEvent::new(
            touches,
            distance,
            Direction::of_drag(distance),
            status,
            view_rect,
        ))
    }

    fn accept(&mut self, sample: &MotionSample) {
        let in_order = self
            .previous
            .map_or(true, |previous| sample.time_ms >= previous.time_ms);
        if in_order {
            self.tracker.add(sample.time_ms, sample.position);
        }
        self.previous = Some(Anchor::of(sample));
        self.last_touches = sample.touches.clone();
    }

    fn note_segment(&mut self, anchor: Anchor, sample: &MotionSample, distance: Vector) {
        let elapsed = sample.time_ms.saturating_sub(anchor.time_ms);
        if elapsed > 0 && !distance.is_zero() {
            self.segment_velocity = distance * (1000.0 / elapsed as f32);
        }
    }

    fn estimated_velocity(&self) -> Vector {
        let tracked = self.tracker.velocity_with_max(self.max_velocity);
        if tracked.is_zero() {
            self.segment_velocity
        } else {
            tracked
        }
    }

    fn touches_of(&self, sample: &MotionSample) -> TouchSet {
        if sample.touches.is_empty() {
            self.last_touches.clone()
        } else {
            sample.touches.clone()
        }
    }
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
