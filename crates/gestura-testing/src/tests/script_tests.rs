use super::*;
use gestura_foundation::PointerPhase;

#[test]
fn tap_is_down_then_up_at_the_same_spot() {
    let events = PointerScript::starting_at(100).tap_at(4.0, 5.0).build();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, PointerEventKind::Down);
    assert_eq!(events[0].time_ms, 100);
    assert_eq!(events[1].kind, PointerEventKind::Up);
    assert_eq!(events[1].position, Point::new(4.0, 5.0));
    assert_eq!(events[1].time_ms, 100 + FRAME_MS * 3);
}

#[test]
fn drag_interpolates_one_frame_apart() {
    let events = PointerScript::new()
        .drag(Point::new(0.0, 0.0), Point::new(40.0, -20.0), 4)
        .build();

    assert_eq!(events.len(), 6);
    let moves: Vec<_> = events
        .iter()
        .filter(|event| event.phase == PointerPhase::Move)
        .map(|event| (event.position, event.time_ms))
        .collect();
    assert_eq!(
        moves,
        vec![
            (Point::new(10.0, -5.0), 16),
            (Point::new(20.0, -10.0), 32),
            (Point::new(30.0, -15.0), 48),
            (Point::new(40.0, -20.0), 64),
        ]
    );
    assert_eq!(events[5].time_ms, 80);
}

#[test]
fn pointer_and_buttons_are_stamped_on_every_event() {
    use gestura_foundation::PointerButton;

    let buttons = PointerButtons::NONE.with(PointerButton::Secondary);
    let events = PointerScript::new()
        .pointer(7)
        .buttons(buttons)
        .down(1.0, 1.0)
        .cancel()
        .build();
    assert!(events.iter().all(|event| event.id == 7 && event.buttons == buttons));
    assert_eq!(events[1].phase, PointerPhase::Cancel);
}
