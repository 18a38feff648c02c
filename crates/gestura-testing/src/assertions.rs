//! Assertion helpers for gesture tests
//!
//! Floating point positions go through several unit conversions on their
//! way from a platform callback to a payload, so most comparisons here are
//! approximate.

use gestura_foundation::{GestureStatus, PanEvent};
use gestura_graphics::{Point, Rect, Vector};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

pub fn assert_vector_approx_eq(actual: Vector, expected: Vector, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - dx", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - dy", msg));
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

/// Assert that a sequence of pan steps forms one well-formed gesture.
///
/// The first step must be `Started`, the last one terminal, and every
/// step in between `Running`.
pub fn assert_pan_lifecycle(pans: &[PanEvent], msg: &str) {
    assert!(!pans.is_empty(), "{}: no pan events", msg);
    assert_eq!(pans[0].status, GestureStatus::Started, "{}: first status", msg);
    let last = pans.len() - 1;
    if last > 0 {
        assert!(
            pans[last].status.is_terminal(),
            "{}: gesture ended with {:?}",
            msg,
            pans[last].status
        );
    }
    for (index, pan) in pans.iter().enumerate().take(last).skip(1) {
        assert_eq!(
            pan.status,
            GestureStatus::Running,
            "{}: status at step {}",
            msg,
            index
        );
    }
}

/// Sum of the per-step distances of a pan gesture.
pub fn total_distance(pans: &[PanEvent]) -> Vector {
    pans.iter().fold(Vector::ZERO, |total, pan| total + pan.distance)
}
