//! Hero intro animation state

use std::time::{Duration, Instant};

/// Animation phase for the hero intro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Hero sliding up into place
    SlideIn,
    /// Animation finished
    Complete,
}

/// Hero intro animation state
#[derive(Debug)]
pub struct IntroState {
    /// When the intro started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: IntroPhase,
    /// Eased progress, 0.0 at start and 1.0 when settled
    pub progress: f32,
}

impl IntroState {
    /// Duration of the slide-in
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

    pub fn new(now: Instant) -> Self {
        Self {
            start_time: now,
            phase: IntroPhase::SlideIn,
            progress: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, now: Instant) {
        if self.is_complete() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::ANIMATION_DURATION {
            let linear = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            self.progress = simple_easing::cubic_out(linear);
        } else {
            self.skip();
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = IntroPhase::Complete;
        self.progress = 1.0;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == IntroPhase::Complete
    }

    /// Rows the hero is still pushed down by, out of `max_rows`
    pub fn offset_rows(&self, max_rows: u16) -> u16 {
        ((1.0 - self.progress) * f32::from(max_rows)).round() as u16
    }
}
