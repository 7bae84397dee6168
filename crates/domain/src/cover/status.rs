//! Read-only snapshot of a controller, for status endpoints and logs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CoverAction;

/// UTC timestamp attached to the last handled action.
pub type Timestamp = DateTime<Utc>;

/// Point-in-time view of a cover controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerStatus {
    /// Entity id of the controlled cover.
    pub cover: String,
    /// Whether the soft-movement timer is armed.
    pub is_supposedly_moving: bool,
    /// Last known or computed tilt position.
    pub tilt_position: i32,
    pub last_action: Option<CoverAction>,
    pub last_action_at: Option<Timestamp>,
}
