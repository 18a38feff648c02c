//! Testing utilities and harness for Gestura

pub mod assertions;
pub mod direct;
pub mod recorder;
pub mod rule;
pub mod script;

pub use assertions::*;
pub use direct::{DirectAdapter, EngineCall};
pub use recorder::{EventRecorder, RecordedEvent};
pub use rule::GestureTestRule;
pub use script::PointerScript;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::direct::{DirectAdapter, EngineCall};
    pub use crate::recorder::{EventRecorder, RecordedEvent};
    pub use crate::rule::GestureTestRule;
    pub use crate::script::PointerScript;
}
