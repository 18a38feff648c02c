use gestura_graphics::Vector;

/// Cardinal direction of a movement, decided by its dominant axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Unknown,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Unknown => Direction::Unknown,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Direction of a pan step that moved the touch by `distance`.
    ///
    /// The pan convention is defined on the scroll delta (previous minus
    /// current position), which is the negated finger movement.
    pub fn of_drag(distance: Vector) -> Self {
        classify(-distance.x, -distance.y, SignConvention::Pan)
    }

    /// Direction of a release velocity.
    pub fn of_swipe(velocity: Vector) -> Self {
        classify(velocity.x, velocity.y, SignConvention::Swipe)
    }
}

/// How the sign of a delta maps onto a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignConvention {
    /// Scroll-delta convention: positive x is Left, positive y is Up.
    Pan,
    /// Screen convention: positive x is Right, positive y is Down.
    Swipe,
}

/// Classifies a delta by its dominant axis. Ties go to the vertical axis;
/// a zero or non-finite delta is `Unknown`.
pub fn classify(dx: f32, dy: f32, convention: SignConvention) -> Direction {
    if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
        return Direction::Unknown;
    }

    let natural = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };

    match convention {
        SignConvention::Swipe => natural,
        SignConvention::Pan => natural.opposite(),
    }
}

#[cfg(test)]
#[path = "tests/direction_tests.rs"]
mod tests;
