//! Unit types: Dp, Px, and display density conversions

use crate::{Point, Rect, Vector};

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

/// Raw device pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

/// Display density: how many device pixels make up one logical unit.
///
/// Platform shims receive coordinates in device pixels and convert them
/// through this type before anything reaches the classifiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(f32);

impl Density {
    pub const IDENTITY: Density = Density(1.0);

    /// Creates a density, falling back to `1.0` for zero, negative or
    /// non-finite factors.
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::IDENTITY
        }
    }

    pub fn factor(&self) -> f32 {
        self.0
    }

    pub fn to_logical(&self, px: f32) -> f32 {
        Dp::from_px(px, self.0).0
    }

    pub fn to_px(&self, logical: f32) -> f32 {
        Dp(logical).to_px(self.0)
    }

    pub fn point_from_px(&self, x: f32, y: f32) -> Point {
        Point::new(self.to_logical(x), self.to_logical(y))
    }

    pub fn vector_from_px(&self, dx: f32, dy: f32) -> Vector {
        Vector::new(self.to_logical(dx), self.to_logical(dy))
    }

    pub fn rect_from_px(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::new(
            self.to_logical(x),
            self.to_logical(y),
            self.to_logical(width),
            self.to_logical(height),
        )
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}
