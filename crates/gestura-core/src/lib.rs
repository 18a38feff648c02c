//! Core runtime services for Gestura.
//!
//! Everything in here is single-threaded: handles are `Rc` based and
//! therefore `!Send`, which pins deferred callbacks and event delivery to
//! the thread that owns the UI loop.

mod channel;
mod platform;
mod scheduler;

pub use channel::{EventChannel, SubscriptionId};
pub use platform::{Clock, ManualClock, SystemClock};
pub use scheduler::{TaskId, TaskRegistration, UiScheduler};

pub mod prelude {
    pub use crate::channel::{EventChannel, SubscriptionId};
    pub use crate::platform::Clock;
    pub use crate::scheduler::{TaskRegistration, UiScheduler};
}
