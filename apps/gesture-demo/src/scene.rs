use gestura_behavior::{GestureBehavior, GestureConfig, ViewId, ViewRegistry};
use gestura_core::UiScheduler;
use gestura_foundation::{PointerButtons, PointerEvent, PointerEventKind, ViewConfiguration};
use gestura_graphics::{Point, Rect};
use gestura_platform_pointer::PointerAdapter;
use std::cell::Cell;
use std::rc::Rc;

/// Quiet time inserted between scenarios so no timer or tap window leaks
/// into the next one.
const SETTLE_MS: u64 = 1_000;

const FRAME_MS: u64 = 16;

/// Pointer input relative to the start of a scenario.
#[derive(Default)]
pub struct Script {
    events: Vec<PointerEvent>,
    buttons: PointerButtons,
    time_ms: u64,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn pause(mut self, millis: u64) -> Self {
        self.time_ms += millis;
        self
    }

    pub fn tap(self, at: Point) -> Self {
        self.push(PointerEventKind::Down, at)
            .pause(3 * FRAME_MS)
            .push(PointerEventKind::Up, at)
    }

    pub fn hold(self, at: Point, millis: u64) -> Self {
        self.push(PointerEventKind::Down, at)
            .pause(millis)
            .push(PointerEventKind::Up, at)
    }

    pub fn drag(mut self, from: Point, to: Point, steps: u32, step_ms: u64) -> Self {
        self = self.push(PointerEventKind::Down, from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let at = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self = self.pause(step_ms).push(PointerEventKind::Move, at);
        }
        self.push(PointerEventKind::Up, to)
    }

    fn push(mut self, kind: PointerEventKind, at: Point) -> Self {
        self.events
            .push(PointerEvent::new(kind, at, self.time_ms).with_buttons(self.buttons));
        self
    }
}

struct Counter(Rc<Cell<usize>>);

impl Counter {
    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

pub struct Scene {
    scheduler: UiScheduler,
    // Behaviors only hold the registry weakly.
    _registry: Rc<ViewRegistry<PointerAdapter>>,
    button: GestureBehavior<PointerAdapter>,
    _ancestors: Vec<GestureBehavior<PointerAdapter>>,
    delivered: Rc<Cell<usize>>,
}

impl Scene {
    pub fn new() -> Self {
        let scheduler = UiScheduler::new();
        let registry: Rc<ViewRegistry<PointerAdapter>> = ViewRegistry::new();
        let page = registry.add_root(Rect::new(0.0, 0.0, 800.0, 600.0));
        let card = child(&registry, page, Rect::new(40.0, 40.0, 400.0, 300.0));
        let button = child(&registry, card, Rect::new(60.0, 60.0, 120.0, 40.0));

        let delivered = Rc::new(Cell::new(0));
        let make = |view: ViewId, name: &'static str, config: GestureConfig| {
            let behavior = GestureBehavior::new(
                PointerAdapter::new(ViewConfiguration::default()),
                scheduler.clone(),
                config,
            );
            if !registry.attach(view, &behavior) {
                log::error!("{name}: view {view:?} missing");
            }
            report(name, &behavior, Counter(Rc::clone(&delivered)));
            behavior
        };

        let page_behavior = make(page, "page", GestureConfig::default());
        let card_behavior = make(card, "card", GestureConfig::default());
        let button_behavior = make(button, "button", GestureConfig::default().with_propagation(true));

        Self {
            scheduler,
            _registry: registry,
            button: button_behavior,
            _ancestors: vec![card_behavior, page_behavior],
            delivered,
        }
    }

    pub fn run(&self, title: &str, script: Script) {
        println!("--- {title} ---");
        let start = self.scheduler.now_ms() + SETTLE_MS;
        self.delivered.set(0);

        for event in &script.events {
            let event = PointerEvent {
                time_ms: start + event.time_ms,
                ..*event
            };
            self.scheduler.advance_to(event.time_ms);
            self.button.ingest(&event);
        }
        while let Some(deadline) = self.scheduler.next_deadline() {
            self.scheduler.advance_to(deadline);
        }

        println!("{} events delivered", self.delivered.get());
        println!();
    }
}

fn child(registry: &ViewRegistry<PointerAdapter>, parent: ViewId, bounds: Rect) -> ViewId {
    registry.add_child(parent, bounds).unwrap_or_else(|| {
        log::error!("parent {parent:?} missing; adding {bounds:?} as a root");
        registry.add_root(bounds)
    })
}

fn report(name: &'static str, behavior: &GestureBehavior<PointerAdapter>, counter: Counter) {
    let counter = Rc::new(counter);

    let count = Rc::clone(&counter);
    behavior.taps().subscribe(move |tap| {
        count.bump();
        println!("{name:>6}: tap at ({:.0}, {:.0})", tap.touch.x, tap.touch.y);
    });
    let count = Rc::clone(&counter);
    behavior.double_taps().subscribe(move |tap| {
        count.bump();
        println!("{name:>6}: double tap at ({:.0}, {:.0})", tap.touch.x, tap.touch.y);
    });
    let count = Rc::clone(&counter);
    behavior.long_presses().subscribe(move |press| {
        count.bump();
        println!("{name:>6}: long press at ({:.0}, {:.0})", press.touch.x, press.touch.y);
    });
    let count = Rc::clone(&counter);
    behavior.pans().subscribe(move |pan| {
        count.bump();
        println!(
            "{name:>6}: pan {:?} {:?} by ({:.1}, {:.1})",
            pan.status, pan.direction, pan.distance.x, pan.distance.y
        );
    });
    behavior.swipes().subscribe(move |swipe| {
        counter.bump();
        println!(
            "{name:>6}: swipe {:?} at ({:.0}, {:.0}) units/s",
            swipe.direction, swipe.velocity.x, swipe.velocity.y
        );
    });
}
