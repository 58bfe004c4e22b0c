//! Conway's game of life on the panel
//!
//! The grid wraps at the panel edges. A playout is reseeded once a generation
//! changes nothing or after a fixed number of generations, so oscillators do
//! not run forever. Every playout picks a new random hue for its cells.

use embassy_time::{Duration, Instant};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{Animation, Stage};
use crate::color::{BLACK, Rgb, hue_to_rgb};
use crate::matrix::Matrix;
use crate::pacer::FramePacer;

/// Largest number of cells the grid keeps state for
///
/// Panels with a larger area play on as many whole rows as fit.
pub const LIFE_MAX_CELLS: usize = 1024;

const WORD_BITS: usize = u32::BITS as usize;
const WORDS: usize = LIFE_MAX_CELLS / WORD_BITS;

const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(200);
const DEFAULT_MAX_GENERATIONS: u16 = 50;
const DEFAULT_START_PERCENT: u8 = 30;
const DEFAULT_SEED: u64 = 0x1CE5_EED5;
const DEFAULT_WIDTH: u16 = 5;
const DEFAULT_HEIGHT: u16 = 5;

/// Cell states, one bit per cell, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cells([u32; WORDS]);

impl Cells {
    const EMPTY: Self = Self([0; WORDS]);

    fn get(&self, index: usize) -> bool {
        self.0[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    fn set(&mut self, index: usize, alive: bool) {
        let mask = 1 << (index % WORD_BITS);
        if alive {
            self.0[index / WORD_BITS] |= mask;
        } else {
            self.0[index / WORD_BITS] &= !mask;
        }
    }
}

#[derive(Debug, Clone)]
pub struct LifeAnimation {
    rng: SmallRng,
    matrix: Matrix,
    width: usize,
    rows: usize,
    cells: Cells,
    color: Rgb,
    generation: u16,
    max_generations: Option<u16>,
    start_percent: u8,
    /// Whether the last generation changed any cell
    changed: bool,
    /// Draw a fresh seed on the next frame
    reseed: bool,
    pacer: FramePacer,
}

impl Default for LifeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeAnimation {
    pub fn new() -> Self {
        let mut animation = Self {
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
            matrix: Matrix::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            width: 0,
            rows: 0,
            cells: Cells::EMPTY,
            color: BLACK,
            generation: 0,
            max_generations: Some(DEFAULT_MAX_GENERATIONS),
            start_percent: DEFAULT_START_PERCENT,
            changed: false,
            reseed: true,
            pacer: FramePacer::new(DEFAULT_FRAME_INTERVAL),
        };
        animation.fit(animation.matrix);
        animation
    }

    /// Seed the random source used for starting grids and colors
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Generations a playout may run before it is reseeded, `None` for no limit
    #[must_use]
    pub const fn with_max_generations(mut self, max_generations: Option<u16>) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Chance (0-100) of a cell being alive in a fresh seed
    #[must_use]
    pub const fn with_start_percent(mut self, percent: u8) -> Self {
        self.start_percent = if percent > 100 { 100 } else { percent };
        self
    }

    /// Set the frame interval
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.pacer = FramePacer::new(interval);
        self
    }

    /// Generations since the last seed
    pub const fn generation(&self) -> u16 {
        self.generation
    }

    /// Color of the live cells in the current playout
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Check whether the cell at `(x, y)` is alive; `false` off the grid
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.cell_index(x, y).is_some_and(|index| self.cells.get(index))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        (0..self.width * self.rows)
            .filter(|index| self.cells.get(*index))
            .count()
    }

    /// Replace the grid with exactly the listed live cells
    ///
    /// Cells off the grid are ignored. The loaded grid counts as generation 0
    /// and is stepped on the next frame.
    pub fn load(&mut self, live: &[(i32, i32)]) {
        self.cells = Cells::EMPTY;
        for &(x, y) in live {
            if let Some(index) = self.cell_index(x, y) {
                self.cells.set(index, true);
            }
        }
        if self.color == BLACK {
            self.color = self.random_color();
        }
        self.generation = 0;
        self.changed = true;
        self.reseed = false;
    }

    #[allow(clippy::cast_sign_loss)]
    fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        let in_grid = x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.rows;
        in_grid.then(|| y as usize * self.width + x as usize)
    }

    /// Size the grid for `matrix`
    fn fit(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.width = usize::from(matrix.width());
        self.rows = if self.width == 0 {
            0
        } else {
            usize::from(matrix.height()).min(LIFE_MAX_CELLS / self.width)
        };
        self.cells = Cells::EMPTY;
        self.reseed = true;
    }

    fn random_color(&mut self) -> Rgb {
        hue_to_rgb(self.rng.gen_range(0..=u8::MAX))
    }

    fn seed(&mut self) {
        self.color = self.random_color();
        let percent = u32::from(self.start_percent);
        for index in 0..self.width * self.rows {
            let alive = self.rng.gen_ratio(percent, 100);
            self.cells.set(index, alive);
        }
        self.generation = 0;
        self.changed = true;
        self.reseed = false;
    }

    /// Live neighbours of `(x, y)` with the grid wrapping at its edges
    fn neighbours(&self, x: usize, y: usize) -> u8 {
        let left = (x + self.width - 1) % self.width;
        let right = (x + 1) % self.width;
        let up = (y + self.rows - 1) % self.rows;
        let down = (y + 1) % self.rows;

        [
            (left, up),
            (x, up),
            (right, up),
            (left, y),
            (right, y),
            (left, down),
            (x, down),
            (right, down),
        ]
        .into_iter()
        .map(|(nx, ny)| u8::from(self.cells.get(ny * self.width + nx)))
        .sum()
    }

    fn step(&mut self) {
        let mut next = Cells::EMPTY;
        let mut changed = false;
        for y in 0..self.rows {
            for x in 0..self.width {
                let index = y * self.width + x;
                let alive = self.cells.get(index);
                let survives = match self.neighbours(x, y) {
                    3 => true,
                    2 => alive,
                    _ => false,
                };
                next.set(index, survives);
                changed |= survives != alive;
            }
        }
        self.cells = next;
        self.changed = changed;
        self.generation = self.generation.saturating_add(1);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn paint(&self, leds: &mut [Rgb]) {
        for y in 0..self.rows {
            for x in 0..self.width {
                let color = if self.cells.get(y * self.width + x) {
                    self.color
                } else {
                    BLACK
                };
                self.matrix.set(leds, x as i32, y as i32, color);
            }
        }
    }

    fn playout_over(&self) -> bool {
        !self.changed
            || self
                .max_generations
                .is_some_and(|max| self.generation >= max)
    }
}

impl Animation for LifeAnimation {
    fn set_matrix(&mut self, matrix: Matrix) {
        self.fit(matrix);
    }

    fn start(&mut self, now: Instant) {
        self.reseed = true;
        self.pacer.restart(now);
    }

    fn tick<S: Stage>(&mut self, now: Instant, leds: &mut [Rgb], _stage: &mut S) -> bool {
        if self.rows == 0 || !self.pacer.ready(now) {
            return false;
        }

        if self.reseed || self.playout_over() {
            self.seed();
        } else {
            self.step();
        }
        self.paint(leds);
        true
    }

    fn frame_interval(&self) -> Duration {
        self.pacer.interval()
    }
}
