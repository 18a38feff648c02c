//! Host-facing configuration of a gesture behavior.

use gestura_foundation::gesture_constants::{
    IOS_SWIPE_VELOCITY, TAP_DEBOUNCE_MS, WINDOWS_SWIPE_VELOCITY,
};
use gestura_foundation::SwipeThreshold;
use std::cell::Cell;

thread_local! {
    static GLOBAL_SWIPE_THRESHOLD: Cell<SwipeThreshold> = Cell::new(SwipeThreshold::default());
}

/// Sets the swipe threshold used by every behavior on this thread whose
/// config does not carry its own.
pub fn set_global_swipe_velocity_threshold(threshold: SwipeThreshold) {
    GLOBAL_SWIPE_THRESHOLD.with(|global| global.set(threshold));
}

pub fn global_swipe_velocity_threshold() -> SwipeThreshold {
    GLOBAL_SWIPE_THRESHOLD.with(Cell::get)
}

pub fn reset_global_swipe_velocity_threshold() {
    set_global_swipe_velocity_threshold(SwipeThreshold::default());
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Forward every raw event to behaviors on ancestor views as well.
    pub propagate_to_ancestors: bool,
    /// `None` follows the thread-wide default, scaled to the adapter's
    /// maximum fling velocity.
    pub swipe_velocity_threshold: Option<SwipeThreshold>,
    pub tap_debounce_ms: u64,
}

impl GestureConfig {
    /// Android compares fling velocity against a ratio of the device's
    /// maximum fling velocity, which is what the global default expresses.
    pub fn android() -> Self {
        Self::default()
    }

    pub fn ios() -> Self {
        Self::default().with_swipe_threshold(SwipeThreshold::absolute(IOS_SWIPE_VELOCITY))
    }

    pub fn windows() -> Self {
        Self::default().with_swipe_threshold(SwipeThreshold::absolute(WINDOWS_SWIPE_VELOCITY))
    }

    pub fn with_propagation(mut self, propagate: bool) -> Self {
        self.propagate_to_ancestors = propagate;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_velocity_threshold = Some(threshold);
        self
    }

    pub fn with_tap_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.tap_debounce_ms = debounce_ms;
        self
    }

    /// Threshold in effect right now for an adapter whose maximum fling
    /// velocity is `max_fling_velocity`.
    pub fn resolve_swipe_threshold(&self, max_fling_velocity: f32) -> SwipeThreshold {
        self.swipe_velocity_threshold.unwrap_or_else(|| {
            global_swipe_velocity_threshold().with_reference_velocity(max_fling_velocity)
        })
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            propagate_to_ancestors: false,
            swipe_velocity_threshold: None,
            tap_debounce_ms: TAP_DEBOUNCE_MS,
        }
    }
}
