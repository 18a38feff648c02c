//! Shared gesture constants for consistent touch/pointer handling.
//!
//! All distances are in logical units and all velocities in logical units
//! per second. Platform shims that know better (a device's scaled touch
//! slop, its maximum fling velocity) pass their own values through
//! [`ViewConfiguration`].

/// Drag threshold (touch slop) in logical pixels.
///
/// Movement beyond this distance from the press position turns a press into
/// a drag: long-press is disarmed and the release no longer counts as a tap.
/// Matches Android's `ViewConfiguration.TOUCH_SLOP` of ~8dp.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum distance between the two presses of a double tap.
pub const DOUBLE_TAP_SLOP: f32 = 100.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Android's default maximum fling velocity on a baseline density. Also
/// the reference velocity swipe thresholds are expressed against.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Window during which a single tap waits for a possible double tap.
pub const TAP_DEBOUNCE_MS: u64 = 100;

/// Press duration after which a stationary press becomes a long press.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Default swipe threshold, as a fraction of [`MAX_FLING_VELOCITY`].
pub const DEFAULT_SWIPE_VELOCITY_THRESHOLD: f32 = 0.1;

/// UIKit pan release speed that counts as a swipe (points per second).
pub const IOS_SWIPE_VELOCITY: f32 = 800.0;

/// WinUI manipulation release speed that counts as a swipe: 0.5 px/ms.
pub const WINDOWS_SWIPE_VELOCITY: f32 = 500.0;

/// Platform-supplied tuning for one view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    pub touch_slop: f32,
    pub double_tap_slop: f32,
    pub max_fling_velocity: f32,
    pub tap_debounce_ms: u64,
    pub long_press_timeout_ms: u64,
}

impl ViewConfiguration {
    /// Configuration for a display with the given density, scaling the
    /// distance thresholds the way Android's scaled view configuration does.
    pub fn scaled(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        Self {
            touch_slop: DRAG_THRESHOLD * density,
            double_tap_slop: DOUBLE_TAP_SLOP * density,
            max_fling_velocity: MAX_FLING_VELOCITY * density,
            ..Self::default()
        }
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            double_tap_slop: DOUBLE_TAP_SLOP,
            max_fling_velocity: MAX_FLING_VELOCITY,
            tap_debounce_ms: TAP_DEBOUNCE_MS,
            long_press_timeout_ms: LONG_PRESS_TIMEOUT_MS,
        }
    }
}
