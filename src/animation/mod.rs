//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait and paces itself: it can
//! be ticked on every loop iteration and only draws when its frame interval
//! has elapsed.

mod life;
mod rainbow;
mod random;
mod snake;
mod strobo;

use embassy_time::{Duration, Instant};
pub use life::{LIFE_MAX_CELLS, LifeAnimation};
pub use rainbow::{RainbowAnimation, RainbowVariant};
pub use random::{RANDOM_MAX_INTERVAL, RandomPixelAnimation};
pub use snake::{DEFAULT_PALETTE, DEFAULT_PATH, PathStep, SNAKE_LENGTH, SnakeAnimation};
pub use strobo::{FLASH_BRIGHTNESS, FLASH_DURATION, FLOOR_INTERVAL, LONG_INTERVAL, StroboAnimation};

use crate::{color::Rgb, error::ControlError, matrix::Matrix};

const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_RAINBOW_SLIDING: &str = "rainbow_sliding";
const ANIMATION_NAME_SNAKE: &str = "snake";
const ANIMATION_NAME_STROBO: &str = "strobo";
const ANIMATION_NAME_LIFE: &str = "gol";
const ANIMATION_NAME_RANDOM_PIXEL: &str = "random";

const ANIMATION_ID_RAINBOW: u8 = 0;
const ANIMATION_ID_RAINBOW_SLIDING: u8 = 1;
const ANIMATION_ID_SNAKE: u8 = 2;
const ANIMATION_ID_STROBO: u8 = 3;
const ANIMATION_ID_LIFE: u8 = 4;
const ANIMATION_ID_RANDOM_PIXEL: u8 = 5;

/// Direct access to the flush layer
///
/// Most animations only write the pixel buffer. The strobe needs to drive the
/// hardware itself for the length of a flash.
pub trait Stage {
    /// Current hardware brightness
    fn brightness(&self) -> u8;

    /// Change the hardware brightness
    fn set_brightness(&mut self, brightness: u8);

    /// Push `leds` to the hardware right away
    fn show(&mut self, leds: &[Rgb]);

    /// Block for `duration`
    fn hold(&mut self, duration: Duration);
}

pub trait Animation {
    /// Panel the animation will draw on
    ///
    /// Called before [`Animation::start`]. Animations that only fill the
    /// strip can ignore it.
    fn set_matrix(&mut self, _matrix: Matrix) {}

    /// Start pacing from `now`
    ///
    /// Called once the animation is installed and the buffer has settled.
    fn start(&mut self, now: Instant);

    /// Emit at most one frame
    ///
    /// Returns `true` if a frame was drawn. When the frame interval has not
    /// elapsed this is a no-op and `leds` is left untouched.
    fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], stage: &mut S) -> bool;

    /// Current frame interval
    fn frame_interval(&self) -> Duration;
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Whole strip cycling through the hue wheel
    Rainbow(RainbowAnimation),
    /// Hue wheel spread along the strip
    RainbowSliding(RainbowAnimation),
    /// Fading trail running along a path
    Snake(SnakeAnimation),
    /// White flashes with an accelerating rhythm
    Strobo(StroboAnimation),
    /// Conway's game of life, reseeded when it stalls
    Life(LifeAnimation),
    /// One random pixel at a time
    RandomPixel(RandomPixelAnimation),
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Rainbow = ANIMATION_ID_RAINBOW,
    RainbowSliding = ANIMATION_ID_RAINBOW_SLIDING,
    Snake = ANIMATION_ID_SNAKE,
    Strobo = ANIMATION_ID_STROBO,
    Life = ANIMATION_ID_LIFE,
    RandomPixel = ANIMATION_ID_RANDOM_PIXEL,
}

impl Default for AnimationSlot {
    fn default() -> Self {
        AnimationId::Rainbow.to_slot()
    }
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_RAINBOW_SLIDING => Self::RainbowSliding,
            ANIMATION_ID_SNAKE => Self::Snake,
            ANIMATION_ID_STROBO => Self::Strobo,
            ANIMATION_ID_LIFE => Self::Life,
            ANIMATION_ID_RANDOM_PIXEL => Self::RandomPixel,
            _ => return None,
        })
    }

    /// Construct a fresh animation with default parameters
    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::Rainbow => {
                AnimationSlot::Rainbow(RainbowAnimation::new(RainbowVariant::Solid))
            }
            Self::RainbowSliding => {
                AnimationSlot::RainbowSliding(RainbowAnimation::new(RainbowVariant::Sliding))
            }
            Self::Snake => AnimationSlot::Snake(SnakeAnimation::new()),
            Self::Strobo => AnimationSlot::Strobo(StroboAnimation::new()),
            Self::Life => AnimationSlot::Life(LifeAnimation::new()),
            Self::RandomPixel => AnimationSlot::RandomPixel(RandomPixelAnimation::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::RainbowSliding => ANIMATION_NAME_RAINBOW_SLIDING,
            Self::Snake => ANIMATION_NAME_SNAKE,
            Self::Strobo => ANIMATION_NAME_STROBO,
            Self::Life => ANIMATION_NAME_LIFE,
            Self::RandomPixel => ANIMATION_NAME_RANDOM_PIXEL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_RAINBOW_SLIDING => Some(Self::RainbowSliding),
            ANIMATION_NAME_SNAKE => Some(Self::Snake),
            ANIMATION_NAME_STROBO => Some(Self::Strobo),
            ANIMATION_NAME_LIFE => Some(Self::Life),
            ANIMATION_NAME_RANDOM_PIXEL => Some(Self::RandomPixel),
            _ => None,
        }
    }
}

/// Build a fresh animation from its symbolic name
pub fn select(name: &str) -> Result<AnimationSlot, ControlError> {
    AnimationId::parse_from_str(name)
        .map(AnimationId::to_slot)
        .ok_or(ControlError::UnknownAnimation)
}

impl AnimationSlot {
    /// Hand the panel geometry to the current animation
    pub fn set_matrix(&mut self, matrix: Matrix) {
        match self {
            Self::Rainbow(animation) | Self::RainbowSliding(animation) => {
                animation.set_matrix(matrix);
            }
            Self::Snake(animation) => animation.set_matrix(matrix),
            Self::Strobo(animation) => animation.set_matrix(matrix),
            Self::Life(animation) => animation.set_matrix(matrix),
            Self::RandomPixel(animation) => animation.set_matrix(matrix),
        }
    }

    /// Start pacing the current animation
    pub fn start(&mut self, now: Instant) {
        match self {
            Self::Rainbow(animation) | Self::RainbowSliding(animation) => animation.start(now),
            Self::Snake(animation) => animation.start(now),
            Self::Strobo(animation) => animation.start(now),
            Self::Life(animation) => animation.start(now),
            Self::RandomPixel(animation) => animation.start(now),
        }
    }

    /// Tick the current animation
    pub fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], stage: &mut S) -> bool {
        match self {
            Self::Rainbow(animation) | Self::RainbowSliding(animation) => {
                animation.tick(now, leds, stage)
            }
            Self::Snake(animation) => animation.tick(now, leds, stage),
            Self::Strobo(animation) => animation.tick(now, leds, stage),
            Self::Life(animation) => animation.tick(now, leds, stage),
            Self::RandomPixel(animation) => animation.tick(now, leds, stage),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        match self {
            Self::Rainbow(animation) | Self::RainbowSliding(animation) => {
                animation.frame_interval()
            }
            Self::Snake(animation) => animation.frame_interval(),
            Self::Strobo(animation) => animation.frame_interval(),
            Self::Life(animation) => animation.frame_interval(),
            Self::RandomPixel(animation) => animation.frame_interval(),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::RainbowSliding(_) => AnimationId::RainbowSliding,
            Self::Snake(_) => AnimationId::Snake,
            Self::Strobo(_) => AnimationId::Strobo,
            Self::Life(_) => AnimationId::Life,
            Self::RandomPixel(_) => AnimationId::RandomPixel,
        }
    }
}
