use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::{self, AnimationId, AnimationSlot, Stage};
use crate::buffer::PixelBuffer;
use crate::clock::Clock;
use crate::color::Rgb;
use crate::control::ControlRequest;
use crate::error::ControlError;
use crate::matrix::Matrix;
use crate::mode::Mode;
use crate::output::{DEFAULT_BRIGHTNESS, LedOutput};

/// Pause after clearing the strip when an animation becomes active
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

const DEFAULT_WIDTH: u16 = 5;
const DEFAULT_HEIGHT: u16 = 5;

/// Startup configuration of the engine
#[derive(Debug, Clone, Copy)]
pub struct AnimatorConfig {
    /// Panel width in LEDs
    pub width: u16,
    /// Panel height in LEDs
    pub height: u16,
    /// Initial hardware brightness
    pub brightness: u8,
    /// Initial mode
    pub mode: Mode,
    /// Animation installed at startup
    pub animation: AnimationId,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            brightness: DEFAULT_BRIGHTNESS,
            mode: Mode::Animating,
            animation: AnimationId::Rainbow,
        }
    }
}

/// Flush layer as seen by a ticking animation
struct FlushStage<'s, D: OutputDriver, C: Clock, const N: usize> {
    output: &'s mut LedOutput<D, N>,
    clock: &'s mut C,
}

impl<D: OutputDriver, C: Clock, const N: usize> Stage for FlushStage<'_, D, C, N> {
    fn brightness(&self) -> u8 {
        self.output.brightness()
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.output.set_brightness(brightness);
    }

    fn show(&mut self, leds: &[Rgb]) {
        self.output.flush(leds);
    }

    fn hold(&mut self, duration: Duration) {
        self.clock.block_for(duration);
    }
}

/// Animation engine - mode state machine around the active animation
///
/// Owns everything a dispatch cycle touches: the pixel buffer, the flush
/// layer, the clock and the single active animation. Control handlers get
/// `&mut` access between cycles, so no cycle can see a half-applied change.
pub struct Animator<D: OutputDriver, C: Clock, const N: usize> {
    matrix: Matrix,
    mode: Mode,
    animation: AnimationSlot,
    buffer: PixelBuffer<N>,
    output: LedOutput<D, N>,
    clock: C,
}

impl<D: OutputDriver, C: Clock, const N: usize> Animator<D, C, N> {
    /// Create the engine and activate the configured animation
    ///
    /// Blocks for [`SETTLE_DELAY`].
    pub fn new(driver: D, clock: C, config: &AnimatorConfig) -> Self {
        let mut animator = Self {
            matrix: Matrix::new(config.width, config.height),
            mode: config.mode,
            animation: config.animation.to_slot(),
            buffer: PixelBuffer::new(),
            output: LedOutput::new(driver, config.brightness),
            clock,
        };
        animator.activate();
        animator
    }

    /// Run one dispatch step for the current mode
    ///
    /// Exactly one of: tick the animation, leave the buffer alone, clear it.
    pub fn dispatch(&mut self) {
        match self.mode {
            Mode::Animating => {
                let now = self.clock.now();
                let mut stage = FlushStage {
                    output: &mut self.output,
                    clock: &mut self.clock,
                };
                self.animation.tick(now, &mut self.buffer, &mut stage);
            }
            Mode::Interactive => {}
            Mode::Off => self.buffer.clear(),
        }
    }

    /// Push the pixel buffer to the hardware
    pub fn flush(&mut self) {
        self.output.flush(&self.buffer);
    }

    /// Apply a control request
    pub fn apply(&mut self, request: ControlRequest) {
        match request {
            ControlRequest::Animation(id) => self.set_animation(id),
            ControlRequest::Mode(mode) => self.set_mode(mode),
            ControlRequest::Brightness(brightness) => self.set_brightness(brightness),
            ControlRequest::Pixel { x, y, color } => self.set_pixel(x, y, color),
        }
    }

    /// Replace the active animation by name
    ///
    /// Unknown names leave the current animation running.
    pub fn select_animation(&mut self, name: &str) -> Result<AnimationId, ControlError> {
        let Ok(slot) = animation::select(name) else {
            #[cfg(feature = "esp32-log")]
            println!("[Animator.select_animation] unknown animation {:?}", name);
            return Err(ControlError::UnknownAnimation);
        };
        let id = slot.id();
        self.install(slot);
        Ok(id)
    }

    /// Replace the active animation with a fresh instance of `id`
    pub fn set_animation(&mut self, id: AnimationId) {
        self.install(id.to_slot());
    }

    /// Install `slot` as the active animation
    ///
    /// The previous animation is dropped here, then the strip is cleared and
    /// left to settle before the new one starts pacing.
    pub fn install(&mut self, slot: AnimationSlot) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Animator.install] {} -> {}",
            self.animation.id().as_str(),
            slot.id().as_str()
        );
        self.animation = slot;
        self.activate();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator.set_mode] {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    /// Set the mode by its control-surface name
    ///
    /// Unknown names leave the mode unchanged.
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<Mode, ControlError> {
        let mode = Mode::try_from(name)?;
        self.set_mode(mode);
        Ok(mode)
    }

    /// Set the hardware brightness
    pub fn set_brightness(&mut self, brightness: u8) {
        self.output.set_brightness(brightness);
    }

    /// Write a pixel by panel coordinates; off-panel writes are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        self.matrix.set(&mut self.buffer, x, y, color);
    }

    /// Read a pixel by panel coordinates; black when off-panel
    pub fn pixel(&self, x: i32, y: i32) -> Rgb {
        self.matrix.get(&self.buffer, x, y)
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    pub const fn matrix(&self) -> Matrix {
        self.matrix
    }

    pub const fn brightness(&self) -> u8 {
        self.output.brightness()
    }

    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Raw buffer access for the interactive writer
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.buffer
    }

    pub const fn output(&self) -> &LedOutput<D, N> {
        &self.output
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Clear, settle and start pacing the active animation
    fn activate(&mut self) {
        self.buffer.clear();
        self.output.flush(&self.buffer);
        self.clock.block_for(SETTLE_DELAY);
        self.animation.set_matrix(self.matrix);
        self.animation.start(self.clock.now());
    }
}
