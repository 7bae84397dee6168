//! Cover action vocabulary — the semantic commands a controller understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A semantic action a cover controller can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverAction {
    Open,
    Close,
    Stop,
    ToggleOpen,
    ToggleClose,
    SetTiltUp,
    SetTiltDown,
    SetTiltOpen,
    SetTiltClose,
}

impl CoverAction {
    /// Every action of the vocabulary, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Open,
        Self::Close,
        Self::Stop,
        Self::ToggleOpen,
        Self::ToggleClose,
        Self::SetTiltUp,
        Self::SetTiltDown,
        Self::SetTiltOpen,
        Self::SetTiltClose,
    ];

    /// The `snake_case` name used in configuration and over the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Stop => "stop",
            Self::ToggleOpen => "toggle_open",
            Self::ToggleClose => "toggle_close",
            Self::SetTiltUp => "set_tilt_up",
            Self::SetTiltDown => "set_tilt_down",
            Self::SetTiltOpen => "set_tilt_open",
            Self::SetTiltClose => "set_tilt_close",
        }
    }
}

impl fmt::Display for CoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_action_from_its_name() {
        for action in CoverAction::ALL {
            assert_eq!(action.as_str().parse::<CoverAction>().unwrap(), action);
        }
    }

    #[test]
    fn should_reject_unknown_action_name() {
        let result = "levitate".parse::<CoverAction>();
        assert_eq!(
            result,
            Err(ValidationError::UnknownAction("levitate".to_string()))
        );
    }

    #[test]
    fn should_serialize_as_snake_case() {
        let json = serde_json::to_string(&CoverAction::SetTiltUp).unwrap();
        assert_eq!(json, "\"set_tilt_up\"");
    }

    #[test]
    fn should_display_snake_case_name() {
        assert_eq!(CoverAction::ToggleClose.to_string(), "toggle_close");
    }
}
