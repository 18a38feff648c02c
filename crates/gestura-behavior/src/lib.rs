//! Per-view gesture behaviors for Gestura
//!
//! A [`GestureBehavior`] is attached to one view. Its [`PlatformAdapter`]
//! turns native callbacks into calls on the behavior's [`GestureEngine`],
//! which classifies them and publishes unified events on five channels.
//! With [`GestureConfig::propagate_to_ancestors`] set, every raw event is
//! also replayed into the behaviors of the view's ancestors.

mod adapter;
mod behavior;
mod config;
mod engine;
mod propagation;
mod view_tree;

pub use adapter::PlatformAdapter;
pub use behavior::GestureBehavior;
pub use config::{
    global_swipe_velocity_threshold, reset_global_swipe_velocity_threshold,
    set_global_swipe_velocity_threshold, GestureConfig,
};
pub use engine::GestureEngine;
pub use view_tree::{BehaviorHost, Behaviors, ViewId, ViewRegistry, ViewTree};

pub mod prelude {
    pub use crate::adapter::PlatformAdapter;
    pub use crate::behavior::GestureBehavior;
    pub use crate::config::GestureConfig;
    pub use crate::engine::GestureEngine;
    pub use crate::view_tree::{ViewId, ViewRegistry, ViewTree};
}
