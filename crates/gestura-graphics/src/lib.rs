//! Pure math/data for gesture geometry & units in Gestura
//!
//! This crate contains the geometry primitives and unit conversions that
//! every other Gestura crate speaks: logical points, displacement vectors,
//! view rectangles and device-pixel to logical-unit conversion.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{centroid, Point, Rect, Size, Vector};
    pub use crate::unit::{Density, Dp, Px};
}
