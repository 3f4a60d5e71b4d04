//! Tests for the rotation timer

use super::*;

const INTERVAL_MS: u64 = 5000;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_new_is_disarmed() {
    let mut timer = RotationTimer::new(INTERVAL_MS);
    assert!(!timer.is_armed());
    assert!(!timer.due(Instant::now()));
}

#[test]
fn test_not_due_before_interval() {
    let mut timer = RotationTimer::new(INTERVAL_MS);
    let start = Instant::now();

    timer.arm(start);
    assert!(!timer.due(start + ms(4999)));
    assert!(timer.is_armed());
}

#[test]
fn test_due_once_per_interval() {
    let mut timer = RotationTimer::new(INTERVAL_MS);
    let start = Instant::now();

    timer.arm(start);
    assert!(timer.due(start + ms(5000)));
    assert!(!timer.due(start + ms(5001)));
    assert!(timer.due(start + ms(10_000)));
    assert!(timer.due(start + ms(15_000)));
}

#[test]
fn test_stalled_loop_catches_up_tick_by_tick() {
    let mut timer = RotationTimer::new(INTERVAL_MS);
    let start = Instant::now();

    timer.arm(start);

    // Three intervals pass before the loop gets to run again
    let late = start + ms(15_000);
    let mut ticks = 0;
    while timer.due(late) {
        ticks += 1;
    }
    assert_eq!(ticks, 3);
    assert!(timer.is_armed());
}

#[test]
fn test_cancel_stops_ticking() {
    let mut timer = RotationTimer::new(INTERVAL_MS);
    let start = Instant::now();

    timer.arm(start);
    timer.cancel();

    assert!(!timer.is_armed());
    assert!(!timer.due(start + ms(60_000)));
}

#[test]
fn test_rearm_replaces_schedule() {
    let mut timer = RotationTimer::new(INTERVAL_MS);
    let start = Instant::now();

    timer.arm(start);
    timer.arm(start + ms(3000));

    assert!(!timer.due(start + ms(5000)));
    assert!(timer.due(start + ms(8000)));
}
