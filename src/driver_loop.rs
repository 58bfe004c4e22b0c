//! Cooperative driver loop.
//!
//! One cycle services the control queue, runs one dispatch step and flushes
//! the buffer. Nothing in a cycle waits except the bounded pauses of an
//! animation switch and a strobe flash, so the loop can be called as fast as
//! the platform allows.
//!
//! # Usage
//!
//! ```ignore
//! static CONTROL: ControlChannel<8> = ControlChannel::new();
//!
//! let animator = Animator::<_, _, 25>::new(driver, SystemClock, &AnimatorConfig::default());
//! let mut driver_loop = DriverLoop::new(animator, CONTROL.receiver());
//!
//! loop {
//!     driver_loop.cycle();
//! }
//! ```

use crate::OutputDriver;
use crate::animator::Animator;
use crate::clock::Clock;
use crate::control::{ControlProcessor, ControlReceiver};
use crate::mode::Mode;

/// Result of a cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleResult {
    /// Mode the dispatch step ran in
    pub mode: Mode,
    /// Number of control requests applied before dispatching
    pub requests: usize,
}

pub struct DriverLoop<'a, D: OutputDriver, C: Clock, const N: usize, const SIZE: usize> {
    control: ControlProcessor<'a, SIZE>,
    animator: Animator<D, C, N>,
}

impl<'a, D: OutputDriver, C: Clock, const N: usize, const SIZE: usize>
    DriverLoop<'a, D, C, N, SIZE>
{
    pub const fn new(animator: Animator<D, C, N>, requests: ControlReceiver<'a, SIZE>) -> Self {
        Self {
            control: ControlProcessor::new(requests),
            animator,
        }
    }

    /// Service the control queue, dispatch once, flush
    pub fn cycle(&mut self) -> CycleResult {
        let requests = self.control.process_pending(&mut self.animator);
        self.animator.dispatch();
        self.animator.flush();

        CycleResult {
            mode: self.animator.mode(),
            requests,
        }
    }

    /// Get a reference to the animator.
    pub const fn animator(&self) -> &Animator<D, C, N> {
        &self.animator
    }

    /// Get a mutable reference to the animator.
    pub fn animator_mut(&mut self) -> &mut Animator<D, C, N> {
        &mut self.animator
    }
}
