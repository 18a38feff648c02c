//! Release velocity estimation.
//!
//! Impulse strategy: the velocity is derived from the kinetic energy the
//! recent samples impart on a unit mass, which weighs the latest movement
//! more than a least-squares fit would and copes with uneven sample rates.

use gestura_graphics::{Point, Vector};

/// Ring buffer capacity.
const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, are ignored.
const HORIZON_MS: u64 = 100;

/// A gap this long between two consecutive samples means the pointer
/// stopped in between.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    value: f32,
}

/// Velocity along a single axis, from absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    head: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            head: 0,
        }
    }

    pub fn add(&mut self, time_ms: u64, value: f32) {
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.samples[self.head] = Some(Sample { time_ms, value });
    }

    /// Velocity in units per second, or zero with fewer than two usable
    /// samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.head] else {
            return 0.0;
        };

        // Newest first; times are negative ages relative to the newest sample.
        let mut values = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.head;
        let mut previous = newest;

        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous.time_ms.abs_diff(sample.time_ms);
            previous = sample;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            values[count] = sample.value;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&values[..count], &times[..count]) * 1000.0
    }

    /// Velocity clamped to `±max_velocity`. A non-positive or non-finite
    /// limit yields zero.
    pub fn velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if !velocity.is_finite() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.head = 0;
    }
}

/// Per-millisecond velocity of newest-first `values` sampled at `times`.
fn impulse_velocity(values: &[f32], times: &[f32]) -> f32 {
    let oldest = values.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let (t_from, t_to) = (times[i], times[i - 1]);
        if t_from == t_to {
            continue;
        }
        let v_curr = (values[i - 1] - values[i]) / (t_to - t_from);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Two independent axis trackers fed with the tracking position.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, time_ms: u64, position: Point) {
        self.x.add(time_ms, position.x);
        self.y.add(time_ms, position.y);
    }

    pub fn velocity(&self) -> Vector {
        Vector::new(self.x.velocity(), self.y.velocity())
    }

    pub fn velocity_with_max(&self, max_velocity: f32) -> Vector {
        Vector::new(
            self.x.velocity_with_max(max_velocity),
            self.y.velocity_with_max(max_velocity),
        )
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
