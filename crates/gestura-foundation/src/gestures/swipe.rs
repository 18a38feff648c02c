use crate::gesture_constants::{DEFAULT_SWIPE_VELOCITY_THRESHOLD, MAX_FLING_VELOCITY};
use gestura_graphics::Vector;

/// Release velocity above which a pan ends as a swipe.
///
/// Expressed as a ratio of a reference velocity so one number can be
/// calibrated per platform: the ratio is compared against
/// `|velocity| / reference_velocity` on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThreshold {
    pub ratio: f32,
    pub reference_velocity: f32,
}

impl SwipeThreshold {
    pub fn new(ratio: f32, reference_velocity: f32) -> Self {
        Self {
            ratio,
            reference_velocity,
        }
    }

    /// Threshold given as an absolute speed in logical units per second.
    pub fn absolute(units_per_second: f32) -> Self {
        Self::new(units_per_second / MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
    }

    pub fn with_ratio(self, ratio: f32) -> Self {
        Self { ratio, ..self }
    }

    pub fn with_reference_velocity(self, reference_velocity: f32) -> Self {
        Self {
            reference_velocity,
            ..self
        }
    }

    /// Smallest per-axis speed that counts as a swipe.
    pub fn min_velocity(&self) -> f32 {
        self.ratio * self.reference_velocity
    }

    pub fn is_swipe(&self, velocity: Vector) -> bool {
        if !velocity.is_finite() || !(self.reference_velocity > 0.0) {
            return false;
        }
        let x = velocity.x.abs() / self.reference_velocity;
        let y = velocity.y.abs() / self.reference_velocity;
        x > self.ratio || y > self.ratio
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_VELOCITY_THRESHOLD, MAX_FLING_VELOCITY)
    }
}
