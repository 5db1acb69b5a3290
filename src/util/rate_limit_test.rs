use super::*;

// =============================================================
// ThrottleGate (leading edge)
// =============================================================

#[test]
fn first_call_fires_immediately() {
    let mut gate = ThrottleGate::new(16.0);
    assert!(gate.try_fire(0.0));
}

#[test]
fn calls_within_the_window_are_dropped() {
    let mut gate = ThrottleGate::new(16.0);
    assert!(gate.try_fire(100.0));
    assert!(!gate.try_fire(101.0));
    assert!(!gate.try_fire(115.9));
}

#[test]
fn window_reopens_after_the_limit() {
    let mut gate = ThrottleGate::new(16.0);
    assert!(gate.try_fire(100.0));
    assert!(!gate.try_fire(110.0));
    assert!(gate.try_fire(116.0));
}

#[test]
fn suppressed_calls_do_not_extend_the_window() {
    let mut gate = ThrottleGate::new(16.0);
    assert!(gate.try_fire(100.0));
    for t in [101.0, 105.0, 110.0, 115.0] {
        assert!(!gate.try_fire(t));
    }
    // Window is measured from the firing, not the last drop.
    assert!(gate.try_fire(116.0));
}

#[test]
fn sixty_hertz_burst_fires_about_once_per_window() {
    let mut gate = ThrottleGate::new(16.0);
    let fired = (0..32).filter(|i| gate.try_fire(f64::from(*i) * 4.0)).count();
    assert_eq!(fired, 8);
}

// =============================================================
// DebounceWindow (trailing edge)
// =============================================================

#[test]
fn nothing_fires_without_a_push() {
    let mut window = DebounceWindow::new(250.0);
    assert!(!window.fire_due(1_000.0));
    assert!(!window.is_pending());
}

#[test]
fn push_fires_after_the_quiet_period() {
    let mut window = DebounceWindow::new(250.0);
    window.push(100.0);
    assert!(window.is_pending());
    assert!(!window.fire_due(349.9));
    assert!(window.fire_due(350.0));
    assert!(!window.is_pending());
}

#[test]
fn newer_pushes_supersede_the_deadline() {
    let mut window = DebounceWindow::new(250.0);
    window.push(100.0);
    window.push(300.0);
    assert!(!window.fire_due(350.0));
    assert!(window.fire_due(550.0));
}

#[test]
fn fire_clears_the_deadline() {
    let mut window = DebounceWindow::new(250.0);
    window.push(0.0);
    assert!(window.fire_due(250.0));
    assert!(!window.fire_due(10_000.0));
}
