//! WinUI adapter for Gestura
//!
//! The host wires a view's pointer routed events and a
//! `Microsoft.UI.Input.GestureRecognizer` (tap, hold, right tap and X/Y
//! translation) to this adapter. Positions are device independent pixels,
//! manipulation velocities are pixels per millisecond.
//!
//! Pans and swipes come from the `Manipulation*` callbacks. Routed pointer
//! moves only feed the recognizer: the adapter validates each intermediate
//! point batch and queues what survives for
//! `GestureRecognizer.ProcessMoveEvents`, see
//! [`WinUiAdapter::take_recognizer_moves`].

use gestura_behavior::{GestureEngine, PlatformAdapter};
use gestura_foundation::{
    MotionSample, PointerDispatcher, PointerEvent, PointerEventKind, PointerId, TapConfirmation,
};
use gestura_graphics::{Point, Vector};
use smallvec::{smallvec, SmallVec};
use std::rc::Rc;

/// A `PointerPoint` as seen by a routed pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPoint {
    pub id: PointerId,
    pub position: Point,
    pub timestamp_ms: u64,
    pub in_range: bool,
}

impl PointerPoint {
    pub fn new(id: PointerId, position: Point, timestamp_ms: u64) -> Self {
        Self {
            id,
            position,
            timestamp_ms,
            in_range: true,
        }
    }

    pub fn out_of_range(mut self) -> Self {
        self.in_range = false;
        self
    }

    fn to_event(self, kind: PointerEventKind) -> PointerEvent {
        PointerEvent::new(kind, self.position, self.timestamp_ms).with_id(self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldingState {
    Started,
    Completed,
    Canceled,
}

/// Translation and velocity reported by a manipulation callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Manipulation {
    pub position: Point,
    /// Translation since `ManipulationStarted`.
    pub cumulative: Vector,
    /// Linear velocity in pixels per millisecond.
    pub velocity: Vector,
    pub time_ms: u64,
}

impl Manipulation {
    pub fn new(position: Point, cumulative: Vector, time_ms: u64) -> Self {
        Self {
            position,
            cumulative,
            velocity: Vector::ZERO,
            time_ms,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    fn sample(&self) -> MotionSample {
        MotionSample::tracking(self.cumulative.to_point(), smallvec![self.position], self.time_ms)
    }

    /// Linear velocity in units per second.
    fn velocity_per_second(&self) -> Vector {
        self.velocity * 1000.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WinUiGesture {
    PointerPressed(PointerPoint),
    /// `GetIntermediatePoints`: every sample coalesced into one move.
    PointerMoved(Vec<PointerPoint>),
    PointerReleased(PointerPoint),
    PointerCanceled(PointerPoint),
    DoubleTapped { position: Point },
    Tapped { position: Point },
    Holding { state: HoldingState, position: Point },
    RightTapped { position: Point },
    ManipulationStarted { position: Point, time_ms: u64 },
    ManipulationUpdated(Manipulation),
    ManipulationCompleted(Manipulation),
}

pub type RecognizerMoves = SmallVec<[PointerPoint; 8]>;

#[derive(Default)]
pub struct WinUiAdapter {
    moves: PointerDispatcher,
    recognizer_moves: RecognizerMoves,
    /// The last press ended in a release rather than a cancel.
    gesture_succeeded: bool,
    /// `Tapped` fires again for the second tap of a double tap.
    double_tapped: bool,
}

impl WinUiAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated intermediate points, oldest first, for the host to hand to
    /// the platform recognizer. Invalid or out-of-order batches never
    /// appear here.
    pub fn take_recognizer_moves(&mut self) -> RecognizerMoves {
        std::mem::take(&mut self.recognizer_moves)
    }

    fn pressed(&mut self, point: &PointerPoint) {
        self.gesture_succeeded = false;
        self.moves.reset();
        self.recognizer_moves.clear();
        // The press is the ordering baseline for the moves that follow.
        if let Err(error) = self.moves.push(point.to_event(PointerEventKind::Down)) {
            log::warn!("dropping pointer press: {error}");
        }
        self.moves.drain(|_, _| {});
    }

    fn moved(&mut self, points: &[PointerPoint]) {
        let batch = points
            .iter()
            .filter(|point| point.in_range)
            .map(|point| point.to_event(PointerEventKind::Move));
        match self.moves.push_batch(batch) {
            Ok(count) => log::trace!("accepted {count} intermediate points"),
            Err(error) => {
                log::warn!("dropping pointer move batch: {error}");
                return;
            }
        }
        let queued = &mut self.recognizer_moves;
        self.moves.drain(|_, event| {
            queued.push(PointerPoint::new(event.id, event.position, event.time_ms));
        });
    }

    fn canceled(&mut self, engine: &GestureEngine) {
        if !self.gesture_succeeded && engine.is_panning() {
            log::debug!("pointer canceled mid-pan");
            engine.pan_cancel(None);
        }
        self.gesture_succeeded = false;
        self.moves.reset();
    }

    fn tapped(&mut self, position: Point, engine: &GestureEngine) {
        if self.double_tapped {
            self.double_tapped = false;
            log::trace!("second tap of a double tap swallowed");
            return;
        }
        engine.tap(position, self.tap_confirmation());
    }
}

impl PlatformAdapter for WinUiAdapter {
    type RawEvent = WinUiGesture;

    fn ingest(&mut self, event: &WinUiGesture, engine: &Rc<GestureEngine>) {
        match event {
            WinUiGesture::PointerPressed(point)
            | WinUiGesture::PointerReleased(point)
            | WinUiGesture::PointerCanceled(point)
                if !point.in_range =>
            {
                log::trace!("pointer {} out of range ignored", point.id);
            }
            WinUiGesture::PointerPressed(point) => self.pressed(point),
            WinUiGesture::PointerMoved(points) => self.moved(points),
            WinUiGesture::PointerReleased(_) => self.gesture_succeeded = true,
            WinUiGesture::PointerCanceled(_) => self.canceled(engine),
            WinUiGesture::DoubleTapped { position } => {
                self.double_tapped = true;
                engine.double_tap(*position);
            }
            WinUiGesture::Tapped { position } => self.tapped(*position, engine),
            WinUiGesture::Holding { state, position } => {
                if *state == HoldingState::Started {
                    engine.long_press(*position);
                }
            }
            WinUiGesture::RightTapped { position } => engine.long_press(*position),
            WinUiGesture::ManipulationStarted { position, time_ms } => {
                let origin = MotionSample::tracking(Point::ZERO, smallvec![*position], *time_ms);
                engine.pan_begin(&origin);
            }
            WinUiGesture::ManipulationUpdated(manipulation) => {
                engine.pan_move(&manipulation.sample());
            }
            WinUiGesture::ManipulationCompleted(manipulation) => {
                engine.pan_release(&manipulation.sample(), Some(manipulation.velocity_per_second()));
            }
        }
    }

    fn tap_confirmation(&self) -> TapConfirmation {
        TapConfirmation::Debounced
    }

    fn reset(&mut self) {
        self.moves.reset();
        self.recognizer_moves.clear();
        self.gesture_succeeded = false;
        self.double_tapped = false;
    }
}
