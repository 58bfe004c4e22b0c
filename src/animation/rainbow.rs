//! Hue cycling animations
//!
//! - `Solid`: the whole strip shows one hue that walks around the wheel
//! - `Sliding`: every LED is offset by one step, so the wheel scrolls along
//!   the strip

use embassy_time::{Duration, Instant};

use super::{Animation, Stage};
use crate::{
    color::{Rgb, hue_to_rgb},
    pacer::FramePacer,
};

const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_HUE_STEP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowVariant {
    Solid,
    Sliding,
}

#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    variant: RainbowVariant,
    /// Hue of the last frame (0-255, wraps)
    hue: u8,
    /// Hue increment per frame
    step: u8,
    pacer: FramePacer,
}

impl RainbowAnimation {
    pub const fn new(variant: RainbowVariant) -> Self {
        Self {
            variant,
            hue: 0,
            step: DEFAULT_HUE_STEP,
            pacer: FramePacer::new(DEFAULT_FRAME_INTERVAL),
        }
    }

    /// Set the starting hue
    #[must_use]
    pub const fn with_hue(mut self, hue: u8) -> Self {
        self.hue = hue;
        self
    }

    /// Set the hue increment per frame
    #[must_use]
    pub const fn with_step(mut self, step: u8) -> Self {
        self.step = step;
        self
    }

    /// Set the frame interval
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.pacer = FramePacer::new(interval);
        self
    }

    pub const fn variant(&self) -> RainbowVariant {
        self.variant
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn step(&self) -> u8 {
        self.step
    }
}

impl Animation for RainbowAnimation {
    fn start(&mut self, now: Instant) {
        self.pacer.restart(now);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], _stage: &mut S) -> bool {
        if !self.pacer.ready(now) {
            return false;
        }

        // Overflow walks the wheel
        self.hue = self.hue.wrapping_add(self.step);

        match self.variant {
            RainbowVariant::Solid => leds.fill(hue_to_rgb(self.hue)),
            RainbowVariant::Sliding => {
                for (n, led) in leds.iter_mut().enumerate() {
                    let offset = (n as u8).wrapping_mul(self.step);
                    *led = hue_to_rgb(self.hue.wrapping_add(offset));
                }
            }
        }
        true
    }

    fn frame_interval(&self) -> Duration {
        self.pacer.interval()
    }
}
