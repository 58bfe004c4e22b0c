use core::fmt;

/// Rejected control request
///
/// None of these are fatal: the request is dropped and the engine keeps
/// running with its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// The animation name is not known to the factory
    UnknownAnimation,
    /// The mode value is not one of `animation`, `interactive` or `off`
    UnknownMode,
    /// The brightness value is not an integer
    InvalidBrightness,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAnimation => f.write_str("unknown animation"),
            Self::UnknownMode => f.write_str("unknown mode"),
            Self::InvalidBrightness => f.write_str("invalid brightness"),
        }
    }
}

impl core::error::Error for ControlError {}
