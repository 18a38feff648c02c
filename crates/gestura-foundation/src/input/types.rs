use crate::error::GestureError;
use crate::events::TouchSet;
use crate::gestures::GestureStatus;
use gestura_graphics::{centroid, Point};
use smallvec::smallvec;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl PointerPhase {
    pub fn to_gesture_status(self) -> GestureStatus {
        match self {
            PointerPhase::Start => GestureStatus::Started,
            PointerPhase::Move => GestureStatus::Running,
            PointerPhase::End => GestureStatus::Completed,
            PointerPhase::Cancel => GestureStatus::Canceled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer sample in logical units, as delivered by a pointer-stream host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub position: Point,
    pub time_ms: u64,
    pub buttons: PointerButtons,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: u64) -> Self {
        Self {
            id: 0,
            kind,
            phase: match kind {
                PointerEventKind::Down => PointerPhase::Start,
                PointerEventKind::Move => PointerPhase::Move,
                PointerEventKind::Up => PointerPhase::End,
                PointerEventKind::Cancel => PointerPhase::Cancel,
            },
            position,
            time_ms,
            buttons: PointerButtons::NONE,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Set the buttons state for this event
    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        if self.position.is_finite() {
            Ok(())
        } else {
            Err(GestureError::InvalidSample {
                time_ms: self.time_ms,
            })
        }
    }

    pub fn to_sample(&self) -> MotionSample {
        MotionSample::single(self.position, self.time_ms)
    }
}

/// One motion sample fed to the pan/swipe classifier.
///
/// `position` is the tracking point whose deltas become pan distances. Most
/// shims use the centroid of the touches; shims whose platform reports a
/// cumulative translation use that translation instead.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionSample {
    pub touches: TouchSet,
    pub position: Point,
    pub time_ms: u64,
}

impl MotionSample {
    /// Sample tracked by the centroid of `touches`.
    pub fn new(touches: TouchSet, time_ms: u64) -> Self {
        Self {
            position: centroid(&touches),
            touches,
            time_ms,
        }
    }

    pub fn single(touch: Point, time_ms: u64) -> Self {
        Self {
            touches: smallvec![touch],
            position: touch,
            time_ms,
        }
    }

    /// Sample tracked by an explicit position, e.g. a cumulative translation.
    pub fn tracking(position: Point, touches: TouchSet, time_ms: u64) -> Self {
        Self {
            touches,
            position,
            time_ms,
        }
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        if self.position.is_finite() && self.touches.iter().all(Point::is_finite) {
            Ok(())
        } else {
            Err(GestureError::InvalidSample {
                time_ms: self.time_ms,
            })
        }
    }
}
