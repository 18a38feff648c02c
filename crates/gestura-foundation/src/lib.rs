//! Gesture classifiers, input types and event payloads for Gestura
//!
//! Nothing in this crate knows about a particular platform. Platform shims
//! translate native callbacks into [`input`] values and drive the
//! classifiers in [`gestures`], which produce the payloads in [`events`].

pub mod error;
pub mod events;
pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use error::GestureError;
pub use events::{LongPressEvent, PanEvent, SwipeEvent, TapEvent, TouchSet};
pub use gesture_constants::ViewConfiguration;
pub use gestures::{
    classify, Direction, GestureLifecycle, GestureStatus, LongPressDetector, MotionOutcome, MotionOutcomes,
    PanSwipeClassifier, SignConvention, SwipeThreshold, TapConfirmation, TapDisambiguator,
};
pub use input::{
    MotionSample, PointerButton, PointerButtons, PointerDispatcher, PointerEvent,
    PointerEventKind, PointerId, PointerPhase,
};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::events::{LongPressEvent, PanEvent, SwipeEvent, TapEvent, TouchSet};
    pub use crate::gestures::{Direction, GestureStatus, SignConvention};
    pub use crate::input::{MotionSample, PointerEvent, PointerEventKind, PointerPhase};
    pub use gestura_graphics::prelude::*;
}
