//! Pointer input in logical units.

mod dispatcher;
mod types;

pub use dispatcher::PointerDispatcher;
pub use types::{
    MotionSample, PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId,
    PointerPhase,
};
