use gestura_foundation::{GestureStatus, MotionSample, TouchSet};
use gestura_graphics::{Density, Point};
use smallvec::SmallVec;

/// `MotionEvent.getActionMasked()` values, with the pointer index folded
/// into the pointer variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAction {
    Down,
    Up,
    Move,
    Cancel,
    Outside,
    PointerDown(u8),
    PointerUp(u8),
    HoverMove,
    Scroll,
    HoverEnter,
    HoverExit,
    ButtonPress,
    ButtonRelease,
}

impl MotionAction {
    pub fn to_gesture_status(self) -> GestureStatus {
        match self {
            MotionAction::Down | MotionAction::ButtonPress | MotionAction::PointerDown(_) => {
                GestureStatus::Started
            }
            MotionAction::Move | MotionAction::Outside => GestureStatus::Running,
            MotionAction::Up | MotionAction::ButtonRelease | MotionAction::PointerUp(_) => {
                GestureStatus::Completed
            }
            _ => GestureStatus::Canceled,
        }
    }

    /// Actions of the stream that started with `Down`. Secondary pointers,
    /// hover, wheel and button changes never start or end a gesture.
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            MotionAction::Down
                | MotionAction::Move
                | MotionAction::Up
                | MotionAction::Cancel
                | MotionAction::Outside
        )
    }
}

/// A `MotionEvent` snapshot. Coordinates are raw device pixels, relative
/// to the view the event was dispatched to.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub pointers: SmallVec<[(f32, f32); 4]>,
    pub event_time_ms: u64,
}

impl MotionEvent {
    pub fn new(action: MotionAction, x: f32, y: f32, event_time_ms: u64) -> Self {
        let mut pointers = SmallVec::new();
        pointers.push((x, y));
        Self {
            action,
            pointers,
            event_time_ms,
        }
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointers.push((x, y));
        self
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// `getX()`: the first pointer, or the origin for a pointerless event.
    pub fn x(&self) -> f32 {
        self.pointers.first().map_or(0.0, |pointer| pointer.0)
    }

    pub fn y(&self) -> f32 {
        self.pointers.first().map_or(0.0, |pointer| pointer.1)
    }

    pub fn position(&self, density: Density) -> Point {
        density.point_from_px(self.x(), self.y())
    }

    pub fn touches(&self, density: Density) -> TouchSet {
        self.pointers
            .iter()
            .map(|&(x, y)| density.point_from_px(x, y))
            .collect()
    }

    pub fn to_sample(&self, density: Density) -> MotionSample {
        MotionSample::new(self.touches(density), self.event_time_ms)
    }
}
