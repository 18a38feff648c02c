use super::*;
use crate::direct::{DirectAdapter, EngineCall};
use crate::recorder::EventRecorder;
use gestura_graphics::Point;

#[test]
fn behavior_is_attached_to_the_requested_view() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    let root = rule.add_root(Rect::new(0.0, 0.0, 100.0, 100.0));
    let child = rule.add_child(root, Rect::new(10.0, 10.0, 20.0, 20.0));
    let behavior = rule.behavior(child, DirectAdapter::default(), GestureConfig::default());

    assert_eq!(behavior.view(), Some(child));
    assert_eq!(behavior.view_rect(), Rect::new(10.0, 10.0, 20.0, 20.0));
}

#[test]
#[should_panic(expected = "not in the hierarchy")]
fn child_of_unknown_parent_panics() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    rule.add_child(ViewId(42), Rect::ZERO);
}

#[test]
fn wait_for_idle_flushes_debounced_taps() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    let view = rule.add_root(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    behavior.ingest(&EngineCall::Tap(Point::new(3.0, 4.0)));
    assert!(recorder.is_empty());
    assert_eq!(rule.wait_for_idle(), 1);
    assert_eq!(recorder.taps().len(), 1);
    assert_eq!(rule.now_ms(), 100);
    assert_eq!(rule.wait_for_idle(), 0);
}

#[test]
fn advance_time_runs_only_what_is_due() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    let view = rule.add_root(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());
    let recorder = EventRecorder::attach(&behavior);

    behavior.ingest(&EngineCall::Tap(Point::ZERO));
    assert_eq!(rule.advance_time(50), 0);
    assert!(recorder.taps().is_empty());
    assert_eq!(rule.advance_time(50), 1);
    assert_eq!(recorder.taps().len(), 1);
}

#[test]
fn dropped_recorder_stops_listening() {
    let rule = GestureTestRule::<DirectAdapter>::new();
    let view = rule.add_root(Rect::ZERO);
    let behavior = rule.behavior(view, DirectAdapter::default(), GestureConfig::default());

    let recorder = EventRecorder::attach(&behavior);
    assert!(behavior.swipes().has_subscribers());
    drop(recorder);
    assert!(!behavior.swipes().has_subscribers());
    assert!(!behavior.taps().has_subscribers());
}
