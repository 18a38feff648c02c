//! Unified gesture payloads delivered to subscribers.
//!
//! Every payload carries the view rectangle measured when the event was
//! produced. Payloads are plain values: subscribers receive them by
//! reference and may clone what they need to keep.

use crate::gestures::{Direction, GestureStatus};
use gestura_graphics::{centroid, Point, Rect, Vector};
use smallvec::SmallVec;

/// Active touch points of a motion gesture.
pub type TouchSet = SmallVec<[Point; 4]>;

/// A single or double tap. Which one is decided by the channel it arrives on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub touch: Point,
    pub view_rect: Rect,
}

impl TapEvent {
    pub fn new(touch: Point, view_rect: Rect) -> Self {
        Self { touch, view_rect }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPressEvent {
    pub touch: Point,
    pub view_rect: Rect,
}

impl LongPressEvent {
    pub fn new(touch: Point, view_rect: Rect) -> Self {
        Self { touch, view_rect }
    }
}

/// One step of a continuous drag.
///
/// `distance` is the movement since the previous step of the same gesture,
/// so summing the distances of a gesture yields its total displacement.
#[derive(Clone, Debug, PartialEq)]
pub struct PanEvent {
    pub touches: TouchSet,
    pub center: Point,
    pub distance: Vector,
    pub direction: Direction,
    pub status: GestureStatus,
    pub view_rect: Rect,
}

impl PanEvent {
    pub fn new(
        touches: TouchSet,
        distance: Vector,
        direction: Direction,
        status: GestureStatus,
        view_rect: Rect,
    ) -> Self {
        Self {
            center: centroid(&touches),
            touches,
            distance,
            direction,
            status,
            view_rect,
        }
    }
}

/// A fast release. Always terminal; `distance` covers the whole gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeEvent {
    pub touches: TouchSet,
    pub center: Point,
    pub distance: Vector,
    pub velocity: Vector,
    pub direction: Direction,
    pub view_rect: Rect,
}

impl SwipeEvent {
    pub fn new(
        touches: TouchSet,
        distance: Vector,
        velocity: Vector,
        direction: Direction,
        view_rect: Rect,
    ) -> Self {
        Self {
            center: centroid(&touches),
            touches,
            distance,
            velocity,
            direction,
            view_rect,
        }
    }
}
