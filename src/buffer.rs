//! Fixed-size frame buffer shared by the animations, the interactive writer
//! and the flush step.

use core::ops::{Deref, DerefMut};

use crate::color::{BLACK, Rgb};

/// In-memory image of the physical strip
///
/// The length is fixed by `N` and never changes. Cell `i` is LED `i` along
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    cells: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every cell black
    pub const fn new() -> Self {
        Self { cells: [BLACK; N] }
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Read a cell, `None` past the end
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied()
    }

    /// Write a cell; writes past the end are ignored
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    /// Set every cell to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    /// Set every cell to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Check that every cell is black
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|cell| *cell == BLACK)
    }

    pub const fn as_slice(&self) -> &[Rgb] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.cells
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for PixelBuffer<N> {
    type Target = [Rgb];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl<const N: usize> DerefMut for PixelBuffer<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cells
    }
}
