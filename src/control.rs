//! Control surface adapter
//!
//! Turns the arguments of the control endpoints into typed requests and
//! carries them to the driver loop. The HTTP layer parses the request, reports
//! parse errors to its client, and queues the result; the driver loop applies
//! queued requests in arrival order at the start of the next cycle.

use core::num::IntErrorKind;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::AnimationId;
use crate::animator::Animator;
use crate::channel::{Channel, Receiver, Sender};
use crate::clock::Clock;
use crate::color::Rgb;
use crate::error::ControlError;
use crate::mode::Mode;

/// A single change requested through the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    /// Replace the active animation
    Animation(AnimationId),
    /// Switch the operating mode
    Mode(Mode),
    /// Set the hardware brightness
    Brightness(u8),
    /// Paint one pixel by panel coordinates
    Pixel { x: i32, y: i32, color: Rgb },
}

impl ControlRequest {
    /// Parse the `animation` field of an animation request
    pub fn animation(name: &str) -> Result<Self, ControlError> {
        AnimationId::parse_from_str(name.trim())
            .map(Self::Animation)
            .ok_or(ControlError::UnknownAnimation)
    }

    /// Parse the `set` argument of a mode request
    pub fn mode(value: &str) -> Result<Self, ControlError> {
        Mode::try_from(value.trim()).map(Self::Mode)
    }

    /// Parse the `val` argument of a brightness request
    ///
    /// Integers outside 0-255 saturate to the nearest bound, however many
    /// digits they have.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness(value: &str) -> Result<Self, ControlError> {
        let level = match value.trim().parse::<i64>() {
            Ok(level) => level.clamp(0, 255) as u8,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => u8::MAX,
                IntErrorKind::NegOverflow => 0,
                _ => return Err(ControlError::InvalidBrightness),
            },
        };
        Ok(Self::Brightness(level))
    }
}

/// Type alias for control request sender
pub type ControlSender<'a, const SIZE: usize> = Sender<'a, ControlRequest, SIZE>;

/// Type alias for control request receiver
pub type ControlReceiver<'a, const SIZE: usize> = Receiver<'a, ControlRequest, SIZE>;

/// Type alias for the control request channel
pub type ControlChannel<const SIZE: usize> = Channel<ControlRequest, SIZE>;

/// Applies queued control requests to the animator
pub struct ControlProcessor<'a, const SIZE: usize> {
    requests: ControlReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> ControlProcessor<'a, SIZE> {
    pub const fn new(requests: ControlReceiver<'a, SIZE>) -> Self {
        Self { requests }
    }

    /// Apply all pending requests (non-blocking)
    ///
    /// Returns how many requests were applied.
    pub fn process_pending<D: OutputDriver, C: Clock, const N: usize>(
        &mut self,
        animator: &mut Animator<D, C, N>,
    ) -> usize {
        let mut applied = 0;
        for request in self.requests.drain() {
            #[cfg(feature = "esp32-log")]
            println!("[ControlProcessor.process_pending] {:?}", request);
            animator.apply(request);
            applied += 1;
        }
        applied
    }
}
