//! Coordinate mapping for serpentine-wired LED panels.
//!
//! The panel is addressed as `(x, y)` with the origin in the top left corner.
//! Each row is wired right to left, so the LED under `(x, y)` sits at
//! `y * width + (width - 1 - x)` along the strip.
//!
//! Addressing outside the panel is never an error: writes are dropped and
//! reads return black, so animations can draw partially off-screen shapes.

use crate::color::{BLACK, Rgb};

/// Immutable panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix {
    width: u16,
    height: u16,
}

impl Matrix {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn width(self) -> u16 {
        self.width
    }

    pub const fn height(self) -> u16 {
        self.height
    }

    /// Number of addressable cells (`width * height`)
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that `(x, y)` lies on the panel
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Strip index of `(x, y)`, `None` outside the panel
    #[allow(clippy::cast_sign_loss)]
    pub const fn index(self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let width = self.width as usize;
        Some(y as usize * width + (width - 1 - x as usize))
    }

    /// Write `color` at `(x, y)`
    ///
    /// No-op when the point is off the panel or maps past the end of `leds`.
    pub fn set(self, leds: &mut [Rgb], x: i32, y: i32, color: Rgb) {
        if let Some(cell) = self.index(x, y).and_then(|index| leds.get_mut(index)) {
            *cell = color;
        }
    }

    /// Read the color at `(x, y)`, black when the point is not backed by a cell
    pub fn get(self, leds: &[Rgb], x: i32, y: i32) -> Rgb {
        self.index(x, y)
            .and_then(|index| leds.get(index).copied())
            .unwrap_or(BLACK)
    }
}
