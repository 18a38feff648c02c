use super::*;
use proptest::prelude::*;

const VIEW: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 200.0,
    height: 200.0,
};

fn at(x: f32, y: f32, time_ms: u64) -> MotionSample {
    MotionSample::single(Point::new(x, y), time_ms)
}

fn pans(outcomes: &MotionOutcomes) -> Vec<&PanEvent> {
    outcomes.iter().filter_map(MotionOutcome::as_pan).collect()
}

fn swipes(outcomes: &MotionOutcomes) -> Vec<&SwipeEvent> {
    outcomes.iter().filter_map(MotionOutcome::as_swipe).collect()
}

#[test]
fn slow_release_completes_the_pan() {
    let mut classifier = PanSwipeClassifier::default();
    let started = classifier.update(&at(0.0, 0.0, 0), VIEW);
    assert_eq!(started.status, GestureStatus::Started);
    assert_eq!(started.distance, Vector::ZERO);

    let first = classifier.update(&at(10.0, 0.0, 16), VIEW);
    let second = classifier.update(&at(30.0, 0.0, 32), VIEW);
    assert_eq!(first.status, GestureStatus::Running);
    assert_eq!(first.distance, Vector::new(10.0, 0.0));
    assert_eq!(first.direction, Direction::Right);
    assert_eq!(second.status, GestureStatus::Running);
    assert_eq!(second.distance, Vector::new(20.0, 0.0));

    // 400 units/s is a ratio of 0.05 against the default reference.
    let outcomes = classifier.release(&at(30.0, 0.0, 40), Some(Vector::new(400.0, 0.0)), true, VIEW);
    assert_eq!(outcomes.len(), 1);
    let completed = pans(&outcomes)[0];
    assert_eq!(completed.status, GestureStatus::Completed);
    assert_eq!(completed.distance, Vector::ZERO);
    assert_eq!(completed.view_rect, VIEW);
    assert!(!classifier.is_active());
}

#[test]
fn fast_release_with_subscriber_swipes() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.update(&at(0.0, 0.0, 0), VIEW);
    classifier.update(&at(10.0, 0.0, 16), VIEW);
    classifier.update(&at(30.0, 0.0, 32), VIEW);

    // Ratio 0.3.
    let outcomes = classifier.release(&at(30.0, 0.0, 40), Some(Vector::new(2400.0, 0.0)), true, VIEW);
    assert_eq!(outcomes.len(), 2);

    let pan = pans(&outcomes);
    assert_eq!(pan.len(), 1);
    assert_eq!(pan[0].status, GestureStatus::Canceled);

    let swipe = swipes(&outcomes);
    assert_eq!(swipe.len(), 1);
    assert_eq!(swipe[0].direction, Direction::Right);
    assert_eq!(swipe[0].velocity, Vector::new(2400.0, 0.0));
    assert_eq!(swipe[0].distance, Vector::new(30.0, 0.0));
    assert!(matches!(outcomes[1], MotionOutcome::Swipe(_)));
}

#[test]
fn fast_release_without_subscriber_completes() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.update(&at(0.0, 0.0, 0), VIEW);
    classifier.update(&at(0.0, 50.0, 10), VIEW);

    let outcomes = classifier.release(&at(0.0, 60.0, 20), Some(Vector::new(0.0, 5000.0)), false, VIEW);
    assert_eq!(outcomes.len(), 1);
    let completed = pans(&outcomes)[0];
    assert_eq!(completed.status, GestureStatus::Completed);
    assert_eq!(completed.distance, Vector::new(0.0, 10.0));
    assert_eq!(completed.direction, Direction::Down);
}

#[test]
fn upward_swipe_uses_screen_convention() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.update(&at(50.0, 100.0, 0), VIEW);
    classifier.update(&at(50.0, 60.0, 10), VIEW);
    let outcomes = classifier.release(&at(50.0, 20.0, 20), Some(Vector::new(10.0, -3000.0)), true, VIEW);
    let swipe = swipes(&outcomes)[0];
    assert_eq!(swipe.direction, Direction::Up);
    assert_eq!(swipe.distance, Vector::new(0.0, -80.0));
}

#[test]
fn tracker_estimate_drives_swipe_without_platform_velocity() {
    let mut classifier = PanSwipeClassifier::default();
    for step in 0..5u64 {
        classifier.update(&at(step as f32 * 40.0, 0.0, step * 10), VIEW);
    }
    // 4 units/ms, well above 800 units/s.
    let outcomes = classifier.release(&at(200.0, 0.0, 50), None, true, VIEW);
    let swipe = swipes(&outcomes);
    assert_eq!(swipe.len(), 1);
    assert!(swipe[0].velocity.x > 800.0);
    assert_eq!(swipe[0].direction, Direction::Right);
}

#[test]
fn last_segment_velocity_is_the_fallback() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.update(&at(0.0, 0.0, 0), VIEW);
    // Samples 100ms apart leave the tracker without a usable window.
    classifier.update(&at(0.0, 20.0, 100), VIEW);
    let outcomes = classifier.release(&at(0.0, 20.0, 200), None, true, VIEW);

    // 20 units over 100ms is 200 units/s: a pan.
    assert_eq!(outcomes.len(), 1);
    assert_eq!(pans(&outcomes)[0].status, GestureStatus::Completed);
}

#[test]
fn press_anchors_the_first_step() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.press(&at(5.0, 5.0, 0));
    assert!(!classifier.is_active());

    let started = classifier.update(&at(15.0, 5.0, 20), VIEW);
    assert_eq!(started.status, GestureStatus::Started);
    assert_eq!(started.distance, Vector::new(10.0, 0.0));
    assert_eq!(started.direction, Direction::Right);
}

#[test]
fn begin_starts_with_zero_distance() {
    let mut classifier = PanSwipeClassifier::default();
    let started = classifier
        .begin(&at(3.0, 4.0, 0), VIEW)
        .expect("idle classifier starts");
    assert_eq!(started.status, GestureStatus::Started);
    assert_eq!(started.distance, Vector::ZERO);
    assert_eq!(started.direction, Direction::Unknown);
    assert!(classifier.begin(&at(3.0, 4.0, 1), VIEW).is_none());

    let running = classifier.update(&at(3.0, 9.0, 10), VIEW);
    assert_eq!(running.status, GestureStatus::Running);
    assert_eq!(running.distance, Vector::new(0.0, 5.0));
}

#[test]
fn cancel_without_sample_carries_zero_distance() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.begin(&at(0.0, 0.0, 0), VIEW);
    let canceled = classifier.cancel(None, VIEW).expect("active gesture cancels");
    assert_eq!(canceled.status, GestureStatus::Canceled);
    assert_eq!(canceled.distance, Vector::ZERO);
    assert!(!classifier.is_active());
}

#[test]
fn cancel_with_sample_carries_remaining_distance() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.update(&at(0.0, 0.0, 0), VIEW);
    let canceled = classifier
        .cancel(Some(&at(-7.0, 0.0, 10)), VIEW)
        .expect("active gesture cancels");
    assert_eq!(canceled.distance, Vector::new(-7.0, 0.0));
    assert_eq!(canceled.direction, Direction::Left);
}

#[test]
fn terminal_without_gesture_emits_nothing() {
    let mut classifier = PanSwipeClassifier::default();
    assert!(classifier.cancel(None, VIEW).is_none());
    classifier.press(&at(0.0, 0.0, 0));
    assert!(classifier
        .release(&at(0.0, 0.0, 50), Some(Vector::new(5000.0, 0.0)), true, VIEW)
        .is_empty());
}

#[test]
fn state_resets_between_gestures() {
    let mut classifier = PanSwipeClassifier::default();
    classifier.update(&at(0.0, 0.0, 0), VIEW);
    classifier.update(&at(40.0, 0.0, 10), VIEW);
    classifier.release(&at(40.0, 0.0, 20), None, false, VIEW);

    let started = classifier.update(&at(100.0, 100.0, 500), VIEW);
    assert_eq!(started.status, GestureStatus::Started);
    assert_eq!(started.distance, Vector::ZERO);
}

#[test]
fn multi_touch_center_follows_touches() {
    let mut classifier = PanSwipeClassifier::default();
    let sample = MotionSample::new(
        smallvec::smallvec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        0,
    );
    let started = classifier.update(&sample, VIEW);
    assert_eq!(started.center, Point::new(5.0, 5.0));
    assert_eq!(started.touches.len(), 2);
}

#[test]
fn threshold_is_configurable() {
    let mut classifier = PanSwipeClassifier::new(SwipeThreshold::new(0.5, 1000.0));
    classifier.update(&at(0.0, 0.0, 0), VIEW);
    let outcomes = classifier.release(&at(10.0, 0.0, 10), Some(Vector::new(450.0, 0.0)), true, VIEW);
    assert_eq!(pans(&outcomes)[0].status, GestureStatus::Completed);

    classifier.set_threshold(SwipeThreshold::new(0.1, 1000.0));
    assert_eq!(classifier.threshold().ratio, 0.1);
    classifier.update(&at(0.0, 0.0, 100), VIEW);
    let outcomes = classifier.release(&at(10.0, 0.0, 110), Some(Vector::new(450.0, 0.0)), true, VIEW);
    assert_eq!(swipes(&outcomes).len(), 1);
}

proptest! {
    #[test]
    fn pan_steps_sum_to_displacement(
        moves in prop::collection::vec((-50.0f32..50.0, -50.0f32..50.0), 1..24),
        velocity in -3000.0f32..3000.0,
        swipe_enabled in any::<bool>(),
    ) {
        let mut classifier = PanSwipeClassifier::default();
        let mut position = Point::new(100.0, 100.0);
        let start = position;
        classifier.press(&MotionSample::single(position, 0));

        let mut sum = Vector::ZERO;
        let mut time = 0;
        for (dx, dy) in moves {
            time += 8;
            position = position + Vector::new(dx, dy);
            sum += classifier.update(&MotionSample::single(position, time), VIEW).distance;
        }

        let outcomes = classifier.release(
            &MotionSample::single(position, time + 8),
            Some(Vector::new(velocity, 0.0)),
            swipe_enabled,
            VIEW,
        );
        let terminals = pans(&outcomes);
        prop_assert_eq!(terminals.len(), 1);
        prop_assert!(terminals[0].status.is_terminal());
        sum += terminals[0].distance;

        let expected = position - start;
        prop_assert!((sum.x - expected.x).abs() < 1e-2);
        prop_assert!((sum.y - expected.y).abs() < 1e-2);

        let swiped = swipes(&outcomes);
        prop_assert!(swiped.len() <= 1);
        if let Some(swipe) = swiped.first() {
            prop_assert_eq!(terminals[0].status, GestureStatus::Canceled);
            prop_assert!((swipe.distance.x - expected.x).abs() < 1e-2);
        } else {
            prop_assert_eq!(terminals[0].status, GestureStatus::Completed);
        }
    }
}
