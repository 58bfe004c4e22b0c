//! Strobe animation
//!
//! Flashes the whole strip white at full brightness. After `k` flashes the
//! pause is `long * 0.9^k`, truncated to whole milliseconds; once that would
//! drop under the floor the rhythm starts over from the long interval.

use embassy_time::{Duration, Instant};

use super::{Animation, Stage};
use crate::color::{BLACK, Rgb, WHITE};
use crate::pacer::FramePacer;

/// Pause the rhythm starts (and restarts) from
pub const LONG_INTERVAL: Duration = Duration::from_millis(1_000);
/// Shortest pause before the rhythm restarts
pub const FLOOR_INTERVAL: Duration = Duration::from_millis(100);
/// How long the strip stays lit
pub const FLASH_DURATION: Duration = Duration::from_millis(40);
/// Hardware brightness during a flash
pub const FLASH_BRIGHTNESS: u8 = 255;

// Decay factor 0.9
const DECAY_NUMERATOR: u128 = 9;
const DECAY_DENOMINATOR: u128 = 10;

#[derive(Debug, Clone)]
pub struct StroboAnimation {
    /// Interval to the next flash
    pacer: FramePacer,
    /// Flashes since the rhythm last started over
    cycle: u32,
    long_interval: Duration,
    floor_interval: Duration,
    flash_duration: Duration,
}

impl Default for StroboAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl StroboAnimation {
    pub const fn new() -> Self {
        Self {
            pacer: FramePacer::new(LONG_INTERVAL),
            cycle: 0,
            long_interval: LONG_INTERVAL,
            floor_interval: FLOOR_INTERVAL,
            flash_duration: FLASH_DURATION,
        }
    }

    /// Set the long and floor intervals of the rhythm
    #[must_use]
    pub const fn with_intervals(mut self, long: Duration, floor: Duration) -> Self {
        self.pacer = FramePacer::new(long);
        self.long_interval = long;
        self.floor_interval = floor;
        self
    }

    /// Set how long a flash stays lit
    #[must_use]
    pub const fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.flash_duration = duration;
        self
    }

    /// Flashes since the rhythm last started over
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Pause after `cycle` flashes, `None` once it falls under the floor
    ///
    /// Computed from the long interval in one step so rounding never
    /// accumulates across cycles.
    pub fn interval_after(&self, cycle: u32) -> Option<Duration> {
        let numerator = DECAY_NUMERATOR.checked_pow(cycle)?;
        let denominator = DECAY_DENOMINATOR.checked_pow(cycle)?;
        let millis =
            u128::from(self.long_interval.as_millis()).checked_mul(numerator)? / denominator;
        let interval = Duration::from_millis(u64::try_from(millis).ok()?);
        (interval >= self.floor_interval).then_some(interval)
    }

    /// Move the rhythm one flash forward
    fn advance(&mut self) {
        self.cycle += 1;
        let next = match self.interval_after(self.cycle) {
            Some(interval) => interval,
            None => {
                self.cycle = 0;
                self.long_interval
            }
        };
        self.pacer.set_interval(next);
    }
}

impl Animation for StroboAnimation {
    fn start(&mut self, now: Instant) {
        self.cycle = 0;
        self.pacer.set_interval(self.long_interval);
        self.pacer.restart(now);
    }

    fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], stage: &mut S) -> bool {
        if !self.pacer.ready(now) {
            return false;
        }

        let brightness = stage.brightness();
        stage.set_brightness(FLASH_BRIGHTNESS);
        leds.fill(WHITE);
        stage.show(leds);
        stage.hold(self.flash_duration);
        stage.set_brightness(brightness);
        leds.fill(BLACK);

        self.advance();
        true
    }

    fn frame_interval(&self) -> Duration {
        self.pacer.interval()
    }
}
