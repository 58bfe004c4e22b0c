//! Top-level operating mode
//!
//! Selects who owns the pixel buffer on a dispatch cycle:
//! - `Animating`: the active animation
//! - `Interactive`: an external writer, the engine leaves the buffer alone
//! - `Off`: nobody, the buffer is cleared every cycle

use crate::error::ControlError;

const MODE_NAME_ANIMATING: &str = "animation";
const MODE_NAME_INTERACTIVE: &str = "interactive";
const MODE_NAME_OFF: &str = "off";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Animating,
    Interactive,
    Off,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Animating => MODE_NAME_ANIMATING,
            Self::Interactive => MODE_NAME_INTERACTIVE,
            Self::Off => MODE_NAME_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_ANIMATING => Some(Self::Animating),
            MODE_NAME_INTERACTIVE => Some(Self::Interactive),
            MODE_NAME_OFF => Some(Self::Off),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = ControlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_from_str(value).ok_or(ControlError::UnknownMode)
    }
}
