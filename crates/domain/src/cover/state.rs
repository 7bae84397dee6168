//! Cover state as reported by the automation platform.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete state of a cover entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverState {
    Open,
    Opening,
    Closed,
    Closing,
    Unavailable,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CoverState {
    /// Whether the platform reports the cover as physically moving.
    #[must_use]
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

impl fmt::Display for CoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Opening => f.write_str("opening"),
            Self::Closed => f.write_str("closed"),
            Self::Closing => f.write_str("closing"),
            Self::Unknown => f.write_str("unknown"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}
