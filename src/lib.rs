#![no_std]

pub mod animation;
pub mod animator;
pub mod buffer;
pub mod channel;
pub mod clock;
pub mod color;
pub mod control;
pub mod driver_loop;
pub mod error;
pub mod math8;
pub mod matrix;
pub mod mode;
pub mod output;
pub mod pacer;

pub use animation::{AnimationId, AnimationSlot, select};
pub use animator::{Animator, AnimatorConfig, SETTLE_DELAY};
pub use buffer::PixelBuffer;
pub use clock::{Clock, SystemClock};
pub use control::{ControlChannel, ControlProcessor, ControlReceiver, ControlRequest, ControlSender};
pub use driver_loop::{CycleResult, DriverLoop};
pub use error::ControlError;
pub use matrix::Matrix;
pub use mode::Mode;
pub use output::LedOutput;
pub use pacer::FramePacer;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Sink for finished frames, one color per LED in wire order
pub trait OutputDriver {
    /// Push one frame to the strip
    fn write(&mut self, colors: &[Rgb]);
}
