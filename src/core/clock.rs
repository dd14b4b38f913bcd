//! Fixed-timestep frame clock.
//!
//! The physics constants are tuned per frame at a nominal rate, so a host that
//! measures real time feeds elapsed durations in here and runs `advance` once
//! for every whole frame that has accumulated.

use super::constants::MAX_CATCH_UP_MS;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    accumulated: Duration,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            accumulated: Duration::ZERO,
        }
    }

    /// Add elapsed wall time and return how many frames are now due.
    ///
    /// `elapsed` is clamped to `MAX_CATCH_UP_MS` so a stalled terminal does
    /// not release a burst of frames at once.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if self.frame.is_zero() {
            return 0;
        }

        self.accumulated += elapsed.min(Duration::from_millis(MAX_CATCH_UP_MS));

        let mut frames = 0;
        while self.accumulated >= self.frame {
            self.accumulated -= self.frame;
            frames += 1;
        }
        frames
    }

    /// Time left until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        self.frame.saturating_sub(self.accumulated)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
