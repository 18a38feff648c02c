//! Pointer stream adapter for Gestura
//!
//! For hosts that only deliver down/move/up/cancel (winit windows, DOM
//! pointer events). Everything a native gesture detector would do is done
//! here: touch slop decides when a press becomes a drag, a timer turns a
//! stationary press into a long press, and a second press close to the
//! previous tap in space and time is a double tap. Positions are expected
//! in logical units.

use gestura_behavior::{GestureEngine, PlatformAdapter};
use gestura_foundation::{
    GestureStatus, LongPressDetector, PointerButton, PointerDispatcher, PointerEvent, PointerEventKind, PointerId,
    TapConfirmation, ViewConfiguration,
};
use gestura_graphics::Point;
use std::rc::Rc;

#[derive(Clone, Copy, Debug)]
struct Press {
    pointer: PointerId,
    origin: Point,
    dragging: bool,
    /// Second press of a double tap, or a secondary-button press. Its
    /// release is not a tap.
    consumed: bool,
}

#[derive(Clone, Copy, Debug)]
struct LastTap {
    position: Point,
    time_ms: u64,
}

pub struct PointerAdapter {
    config: ViewConfiguration,
    ordering: PointerDispatcher,
    long_press: Option<LongPressDetector>,
    press: Option<Press>,
    last_tap: Option<LastTap>,
}

impl PointerAdapter {
    pub fn new(config: ViewConfiguration) -> Self {
        Self {
            config,
            ordering: PointerDispatcher::new(),
            long_press: None,
            press: None,
            last_tap: None,
        }
    }

    pub fn view_configuration(&self) -> ViewConfiguration {
        self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.press.map_or(false, |press| press.dragging)
    }

    fn accept(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down && self.press.is_none() {
            self.ordering.reset();
        }
        match self.ordering.push(*event) {
            Ok(()) => {
                self.ordering.drain(|_, _| {});
                true
            }
            Err(error) => {
                log::warn!("dropping pointer {:?} event: {error}", event.kind);
                false
            }
        }
    }

    fn down(&mut self, event: &PointerEvent, engine: &GestureEngine) {
        if self.press.is_some() {
            log::trace!("extra pointer {} ignored", event.id);
            return;
        }

        let mut press = Press {
            pointer: event.id,
            origin: event.position,
            dragging: false,
            consumed: false,
        };

        if event.buttons.contains(PointerButton::Secondary) {
            press.consumed = true;
            self.press = Some(press);
            engine.long_press(event.position);
            return;
        }

        if self.is_second_tap(event, engine) {
            press.consumed = true;
            self.last_tap = None;
            self.press = Some(press);
            engine.double_tap(event.position);
            return;
        }

        if let Some(long_press) = self.long_press.as_mut() {
            long_press.arm(event.position);
        }
        self.press = Some(press);
        engine.pan_press(&event.to_sample());
    }

    /// The first tap must still be waiting in the engine's race. Once it has
    /// been delivered, a second press starts a new tap instead.
    fn is_second_tap(&self, event: &PointerEvent, engine: &GestureEngine) -> bool {
        self.last_tap.map_or(false, |last| {
            let elapsed = event.time_ms.saturating_sub(last.time_ms);
            let distance = (event.position - last.position).length();
            elapsed < self.config.tap_debounce_ms
                && distance <= self.config.double_tap_slop
                && engine.has_pending_tap()
        })
    }

    fn moved(&mut self, event: &PointerEvent, engine: &GestureEngine) {
        let Some(press) = self.press.as_mut() else {
            return;
        };
        if press.pointer != event.id || press.consumed {
            return;
        }
        if !press.dragging {
            if (event.position - press.origin).length() <= self.config.touch_slop {
                return;
            }
            press.dragging = true;
            self.last_tap = None;
            if let Some(long_press) = self.long_press.as_mut() {
                long_press.disarm();
            }
            log::debug!("press at {:?} became a drag", press.origin);
        }
        engine.pan_move(&event.to_sample());
    }

    fn up(&mut self, event: &PointerEvent, engine: &GestureEngine) {
        let Some(press) = self.press else {
            return;
        };
        if press.pointer != event.id {
            return;
        }
        self.press = None;

        let long_pressed = match self.long_press.as_mut() {
            Some(long_press) => {
                long_press.disarm();
                long_press.has_fired()
            }
            None => false,
        };

        if press.dragging {
            engine.pan_release(&event.to_sample(), None);
        } else if !press.consumed && !long_pressed {
            self.last_tap = Some(LastTap {
                position: event.position,
                time_ms: event.time_ms,
            });
            engine.tap(event.position, self.tap_confirmation());
        }
    }

    fn cancel(&mut self, event: &PointerEvent, engine: &GestureEngine) {
        let Some(press) = self.press.take() else {
            return;
        };
        if let Some(long_press) = self.long_press.as_mut() {
            long_press.disarm();
        }
        if press.dragging {
            engine.pan_cancel(Some(&event.to_sample()));
        }
    }
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new(ViewConfiguration::default())
    }
}

impl PlatformAdapter for PointerAdapter {
    type RawEvent = PointerEvent;

    fn ingest(&mut self, event: &PointerEvent, engine: &Rc<GestureEngine>) {
        if !self.accept(event) {
            return;
        }
        match event.phase.to_gesture_status() {
            GestureStatus::Started => self.down(event, engine),
            GestureStatus::Running => self.moved(event, engine),
            GestureStatus::Completed => self.up(event, engine),
            GestureStatus::Canceled => self.cancel(event, engine),
        }
    }

    fn tap_confirmation(&self) -> TapConfirmation {
        TapConfirmation::Debounced
    }

    fn on_attach(&mut self, engine: &Rc<GestureEngine>) {
        let weak = Rc::downgrade(engine);
        self.long_press = Some(LongPressDetector::new(
            engine.scheduler().clone(),
            self.config.long_press_timeout_ms,
            move |touch| {
                if let Some(engine) = weak.upgrade() {
                    engine.long_press(touch);
                }
            },
        ));
        engine.set_max_fling_velocity(self.config.max_fling_velocity);
    }

    fn reset(&mut self) {
        if let Some(long_press) = self.long_press.as_mut() {
            long_press.reset();
        }
        self.ordering.reset();
        self.press = None;
        self.last_tap = None;
    }
}
