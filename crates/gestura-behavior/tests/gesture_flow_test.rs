//! End-to-end flows through attached behaviors in a view hierarchy.

use gestura_behavior::{
    reset_global_swipe_velocity_threshold, set_global_swipe_velocity_threshold, GestureConfig,
};
use gestura_foundation::{Direction, GestureStatus, SwipeThreshold, TapConfirmation};
use gestura_graphics::{Point, Rect, Vector};
use gestura_testing::prelude::*;

fn rule_with_view(bounds: Rect) -> (GestureTestRule<DirectAdapter>, gestura_behavior::ViewId) {
    let rule = GestureTestRule::new();
    let view = rule.add_root(bounds);
    (rule, view)
}

#[test]
fn slow_drag_reports_a_complete_pan() {
    let (rule, view) = rule_with_view(Rect::new(0.0, 0.0, 300.0, 300.0));
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    for (x, time_ms) in [(0.0, 0), (20.0, 16), (45.0, 32), (60.0, 48)] {
        behavior.ingest(&EngineCall::move_to(x, 10.0, time_ms));
    }
    behavior.ingest(&EngineCall::release_at(60.0, 10.0, 64, Some(Vector::new(300.0, 0.0))));

    let pans = recorder.pans();
    assert_pan_lifecycle(&pans, "slow drag");
    assert_eq!(pans.last().map(|pan| pan.status), Some(GestureStatus::Completed));
    assert_vector_approx_eq(total_distance(&pans), Vector::new(60.0, 0.0), 0.001, "displacement");
    assert!(pans.iter().skip(1).all(|pan| pan.direction == Direction::Right || pan.distance.is_zero()));
    assert!(recorder.swipes().is_empty());
    assert!(pans
        .iter()
        .all(|pan| pan.view_rect == Rect::new(0.0, 0.0, 300.0, 300.0)));
}

#[test]
fn fast_release_becomes_a_swipe() {
    let (rule, view) = rule_with_view(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    behavior.ingest(&EngineCall::move_to(100.0, 100.0, 0));
    behavior.ingest(&EngineCall::move_to(100.0, 60.0, 10));
    behavior.ingest(&EngineCall::release_at(100.0, 20.0, 20, Some(Vector::new(0.0, -4000.0))));

    assert_eq!(
        recorder.pan_statuses(),
        vec![GestureStatus::Started, GestureStatus::Running, GestureStatus::Canceled]
    );
    let swipes = recorder.swipes();
    assert_count(&swipes, 1, "swipes");
    assert_eq!(swipes[0].direction, Direction::Up);
    assert_vector_approx_eq(swipes[0].distance, Vector::new(0.0, -80.0), 0.001, "swipe distance");

    // The swipe is delivered after the closing pan step.
    assert!(matches!(recorder.events().last(), Some(RecordedEvent::Swipe(_))));
}

#[test]
fn unobserved_swipe_completes_the_pan() {
    let (rule, view) = rule_with_view(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::without_swipes(&behavior);

    behavior.ingest(&EngineCall::move_to(0.0, 0.0, 0));
    behavior.ingest(&EngineCall::release_at(-90.0, 0.0, 10, Some(Vector::new(-5000.0, 0.0))));

    assert_eq!(
        recorder.pan_statuses(),
        vec![GestureStatus::Started, GestureStatus::Completed]
    );
}

#[test]
fn global_threshold_applies_without_override() {
    let (rule, view) = rule_with_view(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    set_global_swipe_velocity_threshold(SwipeThreshold::new(0.5, 8_000.0));
    behavior.ingest(&EngineCall::move_to(0.0, 0.0, 0));
    behavior.ingest(&EngineCall::release_at(50.0, 0.0, 10, Some(Vector::new(2000.0, 0.0))));
    reset_global_swipe_velocity_threshold();

    assert!(recorder.swipes().is_empty());
    assert_eq!(recorder.pan_statuses().last(), Some(&GestureStatus::Completed));
}

#[test]
fn double_tap_suppresses_the_single_tap() {
    let (rule, view) = rule_with_view(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    behavior.ingest(&EngineCall::Tap(Point::new(10.0, 10.0)));
    rule.advance_time(60);
    behavior.ingest(&EngineCall::Tap(Point::new(11.0, 10.0)));
    behavior.ingest(&EngineCall::DoubleTap(Point::new(11.0, 10.0)));
    rule.wait_for_idle();

    assert!(recorder.taps().is_empty());
    assert_count(&recorder.double_taps(), 1, "double taps");
}

#[test]
fn separate_taps_each_deliver_once() {
    let (rule, view) = rule_with_view(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    behavior.ingest(&EngineCall::Tap(Point::new(1.0, 1.0)));
    rule.advance_time(500);
    behavior.ingest(&EngineCall::Tap(Point::new(2.0, 2.0)));
    rule.wait_for_idle();

    let touches: Vec<_> = recorder.taps().iter().map(|tap| tap.touch).collect();
    assert_eq!(touches, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
}

#[test]
fn platform_confirmed_taps_skip_the_debounce() {
    let (rule, view) = rule_with_view(Rect::ZERO);
    let behavior = rule.behavior(
        view,
        DirectAdapter::new(TapConfirmation::PlatformConfirmed),
        GestureConfig::android(),
    );
    let recorder = EventRecorder::attach(&behavior);

    behavior.ingest(&EngineCall::Tap(Point::new(5.0, 5.0)));
    assert_count(&recorder.taps(), 1, "taps");
    assert_eq!(rule.scheduler().pending_tasks(), 0);
}

#[test]
fn propagation_forwards_to_every_ancestor() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    let root = rule.add_root(Rect::new(0.0, 0.0, 500.0, 500.0));
    let card = rule.add_child(root, Rect::new(20.0, 20.0, 200.0, 100.0));
    let button = rule.add_child(card, Rect::new(30.0, 30.0, 40.0, 20.0));

    let page = rule.behavior(root, DirectAdapter::default(), GestureConfig::default());
    let leaf = rule.behavior(
        button,
        DirectAdapter::default(),
        GestureConfig::default().with_propagation(true),
    );
    let page_events = EventRecorder::attach(&page);
    let leaf_events = EventRecorder::attach(&leaf);

    leaf.ingest(&EngineCall::LongPress(Point::new(35.0, 35.0)));

    assert_eq!(
        leaf_events.long_presses()[0].view_rect,
        Rect::new(30.0, 30.0, 40.0, 20.0)
    );
    assert_eq!(
        page_events.long_presses()[0].view_rect,
        Rect::new(0.0, 0.0, 500.0, 500.0)
    );
    assert_eq!(page.with_adapter(|adapter| adapter.ingested()), Some(1));
}

#[test]
fn propagated_pan_runs_its_own_lifecycle() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    let root = rule.add_root(Rect::ZERO);
    let child = rule.add_child(root, Rect::ZERO);
    let outer = rule.behavior(root, DirectAdapter::default(), GestureConfig::default());
    let inner = rule.behavior(
        child,
        DirectAdapter::default(),
        GestureConfig::default().with_propagation(true),
    );
    let outer_events = EventRecorder::without_swipes(&outer);

    inner.ingest(&EngineCall::move_to(0.0, 0.0, 0));
    inner.ingest(&EngineCall::move_to(0.0, 30.0, 16));
    inner.ingest(&EngineCall::Cancel(None));

    assert_eq!(
        outer_events.pan_statuses(),
        vec![GestureStatus::Started, GestureStatus::Running, GestureStatus::Canceled]
    );
    assert!(!outer.engine().is_panning());
}

#[test]
fn moved_view_reports_new_bounds() {
    let (rule, view) = rule_with_view(Rect::new(0.0, 0.0, 10.0, 10.0));
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    rule.registry().set_bounds(view, Rect::new(50.0, 60.0, 10.0, 10.0));
    behavior.ingest(&EngineCall::LongPress(Point::ZERO));

    assert_rect_approx_eq(
        recorder.long_presses()[0].view_rect,
        Rect::new(50.0, 60.0, 10.0, 10.0),
        0.0,
        "view rect",
    );
}
