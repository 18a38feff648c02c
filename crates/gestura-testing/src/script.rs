//! Builder for timed pointer sequences.

use gestura_foundation::{PointerButtons, PointerEvent, PointerEventKind, PointerId};
use gestura_graphics::Point;

/// Frame interval used when a drag is split into steps.
pub const FRAME_MS: u64 = 16;

/// Scripted pointer input with a running clock.
///
/// Every call appends events at the script's current time; [`wait`]
/// moves that time forward. Positions stay where the last event left them.
///
/// ```
/// use gestura_testing::PointerScript;
///
/// let events = PointerScript::new()
///     .down(10.0, 10.0)
///     .drag_to(110.0, 10.0, 5)
///     .up()
///     .build();
/// assert_eq!(events.len(), 7);
/// ```
///
/// [`wait`]: PointerScript::wait
#[derive(Clone, Debug, Default)]
pub struct PointerScript {
    events: Vec<PointerEvent>,
    pointer: PointerId,
    buttons: PointerButtons,
    position: Point,
    time_ms: u64,
}

impl PointerScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(time_ms: u64) -> Self {
        Self {
            time_ms,
            ..Self::default()
        }
    }

    pub fn pointer(mut self, id: PointerId) -> Self {
        self.pointer = id;
        self
    }

    pub fn buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn now_ms(&self) -> u64 {
        self.time_ms
    }

    pub fn wait(mut self, millis: u64) -> Self {
        self.time_ms += millis;
        self
    }

    pub fn down(self, x: f32, y: f32) -> Self {
        self.push(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn move_to(self, x: f32, y: f32) -> Self {
        self.push(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(self) -> Self {
        let position = self.position;
        self.push(PointerEventKind::Up, position)
    }

    pub fn cancel(self) -> Self {
        let position = self.position;
        self.push(PointerEventKind::Cancel, position)
    }

    /// Moves in `steps` equal increments, one frame apart.
    pub fn drag_to(mut self, x: f32, y: f32, steps: usize) -> Self {
        let steps = steps.max(1);
        let start = self.position;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self = self
                .wait(FRAME_MS)
                .move_to(start.x + (x - start.x) * t, start.y + (y - start.y) * t);
        }
        self
    }

    /// Down, drag and up in one go.
    pub fn drag(self, from: Point, to: Point, steps: usize) -> Self {
        self.down(from.x, from.y)
            .drag_to(to.x, to.y, steps)
            .wait(FRAME_MS)
            .up()
    }

    pub fn tap_at(self, x: f32, y: f32) -> Self {
        self.down(x, y).wait(FRAME_MS * 3).up()
    }

    pub fn build(self) -> Vec<PointerEvent> {
        self.events
    }

    fn push(mut self, kind: PointerEventKind, position: Point) -> Self {
        self.position = position;
        self.events.push(
            PointerEvent::new(kind, position, self.time_ms)
                .with_id(self.pointer)
                .with_buttons(self.buttons),
        );
        self
    }
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
