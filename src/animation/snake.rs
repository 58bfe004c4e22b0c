//! Snake animation
//!
//! A short trail runs along a traversal path, brightest at the head. The path
//! lists strip indices in drawing order. Gap entries stand for places where the
//! panel has no LED: they take a step like any other entry but are never lit.

use embassy_time::{Duration, Instant};

use super::{Animation, Stage};
use crate::color::{BLACK, Rgb, rgb_from_u32};
use crate::pacer::FramePacer;

/// Number of lit positions in the trail
pub const SNAKE_LENGTH: usize = 5;

const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// One entry of a traversal path, `None` marks a gap
pub type PathStep = Option<u16>;

#[allow(clippy::cast_sign_loss)]
const fn path_step(raw: i16) -> PathStep {
    if raw < 0 { None } else { Some(raw as u16) }
}

/// Create a traversal path from strip indices, negative values are gaps
macro_rules! snake_path {
    ($($step:expr),* $(,)?) => {
        [
            $(path_step($step)),*
        ]
    };
}

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Outer ring, inner ring, then the centre of the 5x5 panel
pub const DEFAULT_PATH: [PathStep; 28] = snake_path![
    4, 3, 2, 1, 0, 5, 10, 15, 20, 21, 22, 23, 24, 19, 14, 9, //
    -1, 8, 7, 6, 11, 16, 17, 18, 13, //
    -1, 12, -1,
];

/// Blue trail, head first
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_PALETTE: [Rgb; SNAKE_LENGTH] =
    hex_palette![0x0000FF, 0x0000A0, 0x000060, 0x000030, 0x000010];

#[derive(Debug, Clone)]
pub struct SnakeAnimation {
    path: &'static [PathStep],
    palette: [Rgb; SNAKE_LENGTH],
    /// Path slot the head is drawn at on the next frame
    ///
    /// Starts at 0, so the first trail already wraps onto the end of the path.
    head: usize,
    pacer: FramePacer,
}

impl Default for SnakeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeAnimation {
    pub const fn new() -> Self {
        Self {
            path: &DEFAULT_PATH,
            palette: DEFAULT_PALETTE,
            head: 0,
            pacer: FramePacer::new(DEFAULT_FRAME_INTERVAL),
        }
    }

    /// Use a different traversal path
    #[must_use]
    pub const fn with_path(mut self, path: &'static [PathStep]) -> Self {
        self.path = path;
        self.head = 0;
        self
    }

    /// Set the trail colors, head first
    #[must_use]
    pub const fn with_palette(mut self, palette: [Rgb; SNAKE_LENGTH]) -> Self {
        self.palette = palette;
        self
    }

    /// Set the frame interval
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.pacer = FramePacer::new(interval);
        self
    }

    pub const fn path(&self) -> &'static [PathStep] {
        self.path
    }

    pub const fn head(&self) -> usize {
        self.head
    }

    /// Path slots covered by the trail on the next frame, head first
    ///
    /// Always `SNAKE_LENGTH` entries, wrapping backwards past the path start.
    pub fn window(&self) -> [usize; SNAKE_LENGTH] {
        core::array::from_fn(|i| self.slot_behind(i))
    }

    /// Path slot `distance` steps behind the head, wrapping at the path start
    fn slot_behind(&self, distance: usize) -> usize {
        let len = self.path.len().max(1);
        (self.head + len - distance % len) % len
    }
}

impl Animation for SnakeAnimation {
    fn start(&mut self, now: Instant) {
        self.pacer.restart(now);
    }

    fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], _stage: &mut S) -> bool {
        if self.path.is_empty() || !self.pacer.ready(now) {
            return false;
        }

        leds.fill(BLACK);

        // Tail first so the head wins on paths shorter than the trail
        for (distance, color) in self.palette.iter().enumerate().rev() {
            let Some(index) = self.path[self.slot_behind(distance)] else {
                continue;
            };
            if let Some(led) = leds.get_mut(usize::from(index)) {
                *led = *color;
            }
        }

        self.head = (self.head + 1) % self.path.len();
        true
    }

    fn frame_interval(&self) -> Duration {
        self.pacer.interval()
    }
}
