//! Random pixel animation
//!
//! Lights exactly one random LED in a random hue, then waits a random pause
//! shorter than the maximum interval before picking the next one.

use embassy_time::{Duration, Instant};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{Animation, Stage};
use crate::color::{BLACK, Rgb, hue_to_rgb};
use crate::pacer::FramePacer;

/// Upper bound (exclusive) of the pause between two pixels
pub const RANDOM_MAX_INTERVAL: Duration = Duration::from_millis(1_000);

const DEFAULT_SEED: u64 = 0x0BAD_5EED;

#[derive(Debug, Clone)]
pub struct RandomPixelAnimation {
    rng: SmallRng,
    max_interval: Duration,
    pacer: FramePacer,
}

impl Default for RandomPixelAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPixelAnimation {
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SEED, RANDOM_MAX_INTERVAL)
    }

    /// Seed the random source used for pixels, colors and pauses
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self::seeded(seed, self.max_interval)
    }

    /// Set the upper bound of the pause between pixels
    #[must_use]
    pub fn with_max_interval(mut self, max_interval: Duration) -> Self {
        self.max_interval = max_interval;
        let pause = self.random_pause();
        self.pacer.set_interval(pause);
        self
    }

    /// Upper bound of the pause between pixels
    pub const fn max_interval(&self) -> Duration {
        self.max_interval
    }

    fn seeded(seed: u64, max_interval: Duration) -> Self {
        let mut animation = Self {
            rng: SmallRng::seed_from_u64(seed),
            max_interval,
            pacer: FramePacer::new(max_interval),
        };
        let pause = animation.random_pause();
        animation.pacer.set_interval(pause);
        animation
    }

    fn random_pause(&mut self) -> Duration {
        let max = self.max_interval.as_millis();
        if max == 0 {
            return Duration::from_millis(0);
        }
        Duration::from_millis(self.rng.gen_range(0..max))
    }
}

impl Animation for RandomPixelAnimation {
    fn start(&mut self, now: Instant) {
        self.pacer.restart(now);
    }

    fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], _stage: &mut S) -> bool {
        if leds.is_empty() || !self.pacer.ready(now) {
            return false;
        }

        leds.fill(BLACK);
        let index = self.rng.gen_range(0..leds.len());
        leds[index] = hue_to_rgb(self.rng.gen_range(0..=u8::MAX));

        let pause = self.random_pause();
        self.pacer.set_interval(pause);
        true
    }

    fn frame_interval(&self) -> Duration {
        self.pacer.interval()
    }
}
