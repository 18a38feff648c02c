//! Platform-agnostic gesture classifiers.

mod direction;
mod long_press;
mod pan;
mod status;
mod swipe;
mod tap;

pub use direction::{classify, Direction, SignConvention};
pub use long_press::LongPressDetector;
pub use pan::{MotionOutcome, MotionOutcomes, PanSwipeClassifier};
pub use status::{GestureLifecycle, GestureStatus};
pub use swipe::SwipeThreshold;
pub use tap::{TapConfirmation, TapDisambiguator};
