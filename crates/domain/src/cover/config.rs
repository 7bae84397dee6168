//! Per-controller cover configuration.

use serde::Deserialize;

use crate::error::{CoverError, ValidationError};

/// Settings for one cover controller.
///
/// Only `cover` is required; every other field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Entity id of the controlled cover (e.g. `cover.living_room`).
    pub cover: String,
    /// Position sent when opening. Must be `>= close_position`.
    pub open_position: i32,
    /// Position sent when closing.
    pub close_position: i32,
    /// Seconds the cover needs to travel; enables the soft-movement timer.
    pub cover_duration: Option<u64>,
    /// Seconds a fetched tilt position stays valid before it is read again.
    pub update_timeout: u64,
    /// Tilt step used by `set_tilt_up` / `set_tilt_down`.
    pub tilt_delta: i32,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            cover: String::new(),
            open_position: 100,
            close_position: 0,
            cover_duration: None,
            update_timeout: 0,
            tilt_delta: 10,
        }
    }
}

impl CoverConfig {
    /// Configuration for `cover` with every other field at its default.
    #[must_use]
    pub fn for_cover(cover: impl Into<String>) -> Self {
        Self {
            cover: cover.into(),
            ..Self::default()
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::Validation`] when `cover` is empty or when
    /// `open_position < close_position`.
    pub fn validate(&self) -> Result<(), CoverError> {
        if self.cover.is_empty() {
            return Err(ValidationError::EmptyCover.into());
        }
        if self.open_position < self.close_position {
            return Err(ValidationError::PositionBounds {
                open: self.open_position,
                close: self.close_position,
            }
            .into());
        }
        Ok(())
    }
}
