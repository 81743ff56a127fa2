//! Cancellable schedules driven by the event loop
//!
//! Nothing here spawns: owners call `tick`-style queries with the current
//! instant each loop iteration, which keeps every schedule testable with
//! synthetic time.

use std::time::{Duration, Instant};

/// One-shot deadline that can be cancelled before it fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    started_at: Instant,
    duration: Duration,
    cancelled: bool,
}

impl Countdown {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Deadline reached and not cancelled
    pub fn is_expired(&self, now: Instant) -> bool {
        !self.is_cancelled() && now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Percentage of the countdown still left, from 100 down to 0
    pub fn remaining_percent(&self, now: Instant) -> f64 {
        if self.is_cancelled() || self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (100.0 * (1.0 - fraction)).max(0.0)
    }
}

/// Repeating schedule on a fixed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: Some(now + period),
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[allow(dead_code)]
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of periods that elapsed since the last call
    pub fn fire_count(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        if self.period.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        fired
    }
}
