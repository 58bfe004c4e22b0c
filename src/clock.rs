//! Time source used for frame pacing and the few bounded pauses.

use embassy_time::{Duration, Instant};

/// Monotonic time source
///
/// The engine never reads the time on its own; everything goes through this
/// trait so that pacing can be driven by a fake clock in tests.
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Busy-wait for `duration`
    ///
    /// Only used for the settle delay after an animation switch and for the
    /// strobe flash.
    fn block_for(&mut self, duration: Duration);
}

/// Clock backed by the `embassy-time` driver of the target
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn block_for(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
