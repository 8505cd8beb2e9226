use planboard_rs::interaction::PanSession;

#[test]
fn update_while_idle_returns_none() {
    let pan = PanSession::default();
    assert!(pan.update(100.0, 1.5).is_none());
}

#[test]
fn pointer_movement_scales_by_gain() {
    let mut pan = PanSession::default();
    pan.begin(200.0, 1_000.0);

    // Pointer moves 100px right; canvas scrolls 150px left of anchor.
    let offset = pan.update(300.0, 1.5).expect("panning");
    assert!((offset - 850.0).abs() <= 1e-9);

    let offset = pan.update(100.0, 1.5).expect("panning");
    assert!((offset - 1_150.0).abs() <= 1e-9);
}

#[test]
fn anchor_is_fixed_for_the_whole_gesture() {
    let mut pan = PanSession::default();
    pan.begin(0.0, 500.0);

    let _ = pan.update(50.0, 2.0);
    // Later updates measure from the original anchor, not the last pointer.
    let offset = pan.update(10.0, 2.0).expect("panning");
    assert!((offset - 480.0).abs() <= 1e-9);
}

#[test]
fn end_returns_to_idle() {
    let mut pan = PanSession::default();
    pan.begin(0.0, 0.0);
    assert!(pan.is_active());

    pan.end();
    assert!(!pan.is_active());
    assert!(pan.update(10.0, 1.5).is_none());
}
