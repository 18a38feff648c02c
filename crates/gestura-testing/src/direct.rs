//! An adapter that forwards engine calls verbatim.
//!
//! Lets tests drive a [`GestureBehavior`](gestura_behavior::GestureBehavior)
//! without modelling any particular platform's callbacks.

use gestura_behavior::{GestureEngine, PlatformAdapter};
use gestura_foundation::{MotionSample, TapConfirmation};
use gestura_graphics::{Point, Vector};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    Tap(Point),
    DoubleTap(Point),
    LongPress(Point),
    Press(MotionSample),
    Move(MotionSample),
    Release(MotionSample, Option<Vector>),
    Cancel(Option<MotionSample>),
}

impl EngineCall {
    pub fn move_to(x: f32, y: f32, time_ms: u64) -> Self {
        EngineCall::Move(MotionSample::single(Point::new(x, y), time_ms))
    }

    pub fn release_at(x: f32, y: f32, time_ms: u64, velocity: Option<Vector>) -> Self {
        EngineCall::Release(MotionSample::single(Point::new(x, y), time_ms), velocity)
    }
}

#[derive(Clone, Debug)]
pub struct DirectAdapter {
    confirmation: TapConfirmation,
    ingested: usize,
}

impl DirectAdapter {
    pub fn new(confirmation: TapConfirmation) -> Self {
        Self {
            confirmation,
            ingested: 0,
        }
    }

    pub fn ingested(&self) -> usize {
        self.ingested
    }
}

impl Default for DirectAdapter {
    fn default() -> Self {
        Self::new(TapConfirmation::Debounced)
    }
}

impl PlatformAdapter for DirectAdapter {
    type RawEvent = EngineCall;

    fn ingest(&mut self, event: &EngineCall, engine: &Rc<GestureEngine>) {
        self.ingested += 1;
        match event {
            EngineCall::Tap(touch) => engine.tap(*touch, self.confirmation),
            EngineCall::DoubleTap(touch) => engine.double_tap(*touch),
            EngineCall::LongPress(touch) => engine.long_press(*touch),
            EngineCall::Press(sample) => engine.pan_press(sample),
            EngineCall::Move(sample) => engine.pan_move(sample),
            EngineCall::Release(sample, velocity) => engine.pan_release(sample, *velocity),
            EngineCall::Cancel(sample) => engine.pan_cancel(sample.as_ref()),
        }
    }

    fn tap_confirmation(&self) -> TapConfirmation {
        self.confirmation
    }
}
