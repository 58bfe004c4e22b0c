//! Frame pacing for self-timed animations.
//!
//! Animations are ticked far more often than they draw. The pacer decides
//! whether enough time has passed since the last emitted frame; the caller
//! never sleeps.

use embassy_time::{Duration, Instant};

/// Gate that opens once per frame interval
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Duration,
    last_frame: Instant,
}

impl FramePacer {
    /// Create a pacer that considers time zero the last frame
    ///
    /// Call [`FramePacer::restart`] when the animation becomes active.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: Instant::from_millis(0),
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval; the next frame is measured from the last one
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Time of the last emitted frame
    pub const fn last_frame(&self) -> Instant {
        self.last_frame
    }

    /// Start counting the interval from `now`
    pub fn restart(&mut self, now: Instant) {
        self.last_frame = now;
    }

    /// Returns `true` and records `now` if a frame is due
    ///
    /// A clock reading earlier than the last frame counts as "not elapsed",
    /// so the recorded time never moves backwards.
    pub fn ready(&mut self, now: Instant) -> bool {
        let Some(elapsed) = now.checked_duration_since(self.last_frame) else {
            return false;
        };
        if elapsed < self.interval {
            return false;
        }
        self.last_frame = now;
        true
    }
}
