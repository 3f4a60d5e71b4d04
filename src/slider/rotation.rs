use std::time::{Duration, Instant};

/// Repeating slide-rotation timer
///
/// The deadline is an explicit field owned by the slider; at most one
/// schedule exists at a time, and arming replaces any previous one. The
/// slider cancels before re-arming when a new slide set is installed.
#[derive(Debug)]
pub struct RotationTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl RotationTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            next: None,
        }
    }

    /// Schedule the first tick, replacing any existing schedule
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Drop the schedule entirely
    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// True once per elapsed interval, rescheduling for the next tick
    ///
    /// Callers loop on this so a stalled event loop catches up one tick at
    /// a time instead of skipping rotations.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(next + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod rotation_tests;
