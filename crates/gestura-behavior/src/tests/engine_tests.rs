use super::*;
use crate::view_tree::ViewRegistry;
use crate::PlatformAdapter;
use gestura_foundation::{Direction, GestureStatus, SwipeThreshold};
use std::cell::RefCell;

struct NoopAdapter;

impl PlatformAdapter for NoopAdapter {
    type RawEvent = ();

    fn ingest(&mut self, _event: &(), _engine: &Rc<GestureEngine>) {}

    fn tap_confirmation(&self) -> TapConfirmation {
        TapConfirmation::Debounced
    }
}

fn recorder<E: Clone + 'static>(channel: &EventChannel<E>) -> Rc<RefCell<Vec<E>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    channel.subscribe(move |event: &E| sink.borrow_mut().push(event.clone()));
    events
}

fn at(x: f32, y: f32, time_ms: u64) -> MotionSample {
    MotionSample::single(Point::new(x, y), time_ms)
}

fn bound_engine(bounds: Rect) -> (Rc<GestureEngine>, Rc<ViewRegistry<NoopAdapter>>, ViewId) {
    let registry = ViewRegistry::<NoopAdapter>::new();
    let view = registry.add_root(bounds);
    let engine = GestureEngine::new(UiScheduler::new(), GestureConfig::default());
    let weak: Weak<ViewRegistry<NoopAdapter>> = Rc::downgrade(&registry);
    engine.bind(view, weak);
    (engine, registry, view)
}

#[test]
fn single_tap_is_delivered_after_debounce() {
    let (engine, _registry, _view) = bound_engine(Rect::new(0.0, 0.0, 200.0, 200.0));
    let taps = recorder(engine.taps());
    let doubles = recorder(engine.double_taps());

    engine.single_tap_candidate(Point::new(50.0, 50.0));
    engine.scheduler().advance_to(99);
    assert!(taps.borrow().is_empty());
    engine.scheduler().advance_to(100);

    assert_eq!(
        *taps.borrow(),
        vec![TapEvent::new(Point::new(50.0, 50.0), Rect::new(0.0, 0.0, 200.0, 200.0))]
    );
    assert!(doubles.borrow().is_empty());
}

#[test]
fn double_tap_wins_the_race() {
    let (engine, _registry, _view) = bound_engine(Rect::new(0.0, 0.0, 200.0, 200.0));
    let taps = recorder(engine.taps());
    let doubles = recorder(engine.double_taps());

    engine.single_tap_candidate(Point::new(50.0, 50.0));
    engine.scheduler().advance_to(40);
    engine.single_tap_candidate(Point::new(52.0, 51.0));
    engine.double_tap(Point::new(52.0, 51.0));
    engine.scheduler().advance_to(1_000);

    assert!(taps.borrow().is_empty());
    assert_eq!(doubles.borrow().len(), 1);
    assert_eq!(doubles.borrow()[0].touch, Point::new(52.0, 51.0));
}

#[test]
fn confirmed_tap_is_immediate() {
    let (engine, _registry, _view) = bound_engine(Rect::ZERO);
    let taps = recorder(engine.taps());
    engine.tap(Point::new(1.0, 2.0), TapConfirmation::PlatformConfirmed);
    assert_eq!(taps.borrow().len(), 1);
    assert_eq!(engine.scheduler().pending_tasks(), 0);
}

#[test]
fn view_rect_tracks_current_bounds() {
    let (engine, registry, view) = bound_engine(Rect::new(0.0, 0.0, 10.0, 10.0));
    let presses = recorder(engine.long_presses());

    registry.set_bounds(view, Rect::new(5.0, 5.0, 20.0, 20.0));
    engine.long_press(Point::new(3.0, 3.0));
    assert_eq!(presses.borrow()[0].view_rect, Rect::new(5.0, 5.0, 20.0, 20.0));

    registry.remove(view);
    assert_eq!(engine.view_rect(), Rect::ZERO);
    drop(registry);
    assert_eq!(engine.view_rect(), Rect::ZERO);
}

#[test]
fn unbound_engine_reports_zero_rect() {
    let engine = GestureEngine::new(UiScheduler::new(), GestureConfig::default());
    let presses = recorder(engine.long_presses());
    engine.long_press(Point::new(1.0, 1.0));
    assert_eq!(presses.borrow()[0].view_rect, Rect::ZERO);
}

#[test]
fn slow_pan_completes() {
    let (engine, _registry, _view) = bound_engine(Rect::new(0.0, 0.0, 200.0, 200.0));
    let pans = recorder(engine.pans());
    let swipes = recorder(engine.swipes());

    engine.pan_move(&at(0.0, 0.0, 0));
    engine.pan_move(&at(10.0, 0.0, 16));
    engine.pan_move(&at(30.0, 0.0, 32));
    engine.pan_release(&at(30.0, 0.0, 40), Some(Vector::new(400.0, 0.0)));

    let statuses: Vec<_> = pans.borrow().iter().map(|event| event.status).collect();
    assert_eq!(
        statuses,
        vec![
            GestureStatus::Started,
            GestureStatus::Running,
            GestureStatus::Running,
            GestureStatus::Completed
        ]
    );
    assert_eq!(pans.borrow()[1].distance, Vector::new(10.0, 0.0));
    assert_eq!(pans.borrow()[2].distance, Vector::new(20.0, 0.0));
    assert_eq!(pans.borrow()[3].distance, Vector::ZERO);
    assert!(swipes.borrow().is_empty());
}

#[test]
fn fast_pan_swipes_only_when_observed() {
    let (engine, _registry, _view) = bound_engine(Rect::ZERO);
    let pans = recorder(engine.pans());

    engine.pan_move(&at(0.0, 0.0, 0));
    engine.pan_move(&at(30.0, 0.0, 10));
    engine.pan_release(&at(30.0, 0.0, 20), Some(Vector::new(2400.0, 0.0)));
    assert_eq!(pans.borrow().last().map(|e| e.status), Some(GestureStatus::Completed));

    let swipes = recorder(engine.swipes());
    engine.pan_move(&at(0.0, 0.0, 100));
    engine.pan_move(&at(30.0, 0.0, 110));
    engine.pan_release(&at(30.0, 0.0, 120), Some(Vector::new(2400.0, 0.0)));

    assert_eq!(pans.borrow().last().map(|e| e.status), Some(GestureStatus::Canceled));
    assert_eq!(swipes.borrow().len(), 1);
    assert_eq!(swipes.borrow()[0].direction, Direction::Right);
}

#[test]
fn configured_threshold_overrides_global() {
    let (engine, _registry, _view) = bound_engine(Rect::ZERO);
    let swipes = recorder(engine.swipes());
    engine.set_config(GestureConfig::default().with_swipe_threshold(SwipeThreshold::absolute(3000.0)));

    engine.pan_move(&at(0.0, 0.0, 0));
    engine.pan_release(&at(0.0, 30.0, 10), Some(Vector::new(0.0, 2400.0)));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn max_fling_velocity_scales_the_default_threshold() {
    let (engine, _registry, _view) = bound_engine(Rect::ZERO);
    let swipes = recorder(engine.swipes());
    // 0.1 of 32000 is 3200.
    engine.set_max_fling_velocity(32_000.0);
    engine.set_max_fling_velocity(f32::NAN);
    assert_eq!(engine.max_fling_velocity(), 32_000.0);

    engine.pan_move(&at(0.0, 0.0, 0));
    engine.pan_release(&at(30.0, 0.0, 10), Some(Vector::new(2400.0, 0.0)));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn unbind_cancels_pending_work() {
    let (engine, _registry, _view) = bound_engine(Rect::ZERO);
    let taps = recorder(engine.taps());
    let pans = recorder(engine.pans());

    engine.single_tap_candidate(Point::ZERO);
    engine.pan_move(&at(0.0, 0.0, 0));
    engine.unbind();

    assert!(!engine.is_bound());
    assert!(!engine.is_panning());
    assert!(!engine.has_pending_tap());
    engine.scheduler().advance_to(1_000);
    assert!(taps.borrow().is_empty());
    assert_eq!(pans.borrow().len(), 1);
}

#[test]
fn subscribers_may_reenter_the_engine() {
    let (engine, _registry, _view) = bound_engine(Rect::ZERO);
    let weak = Rc::downgrade(&engine);
    let nested = Rc::new(RefCell::new(0));
    let count = Rc::clone(&nested);
    engine.double_taps().subscribe(move |_| {
        if let Some(engine) = weak.upgrade() {
            *count.borrow_mut() += 1;
            engine.long_press(Point::ZERO);
            assert!(!engine.is_panning());
        }
    });

    engine.double_tap(Point::ZERO);
    assert_eq!(*nested.borrow(), 1);
}
