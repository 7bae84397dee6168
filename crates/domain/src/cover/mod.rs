//! Cover — the actuator class this crate controls (blinds, shades, garage doors).

mod action;
mod attribute;
mod config;
mod feature;
mod service;
mod state;
mod status;

pub use action::CoverAction;
pub use attribute::{AttributeValue, CURRENT_POSITION, CURRENT_TILT_POSITION};
pub use config::CoverConfig;
pub use feature::{CoverFeature, SupportedFeatures};
pub use service::{CoverService, ServiceCall};
pub use state::CoverState;
pub use status::{ControllerStatus, Timestamp};

/// Lowest tilt or main-axis position.
pub const MIN_POSITION: i32 = 0;

/// Highest tilt or main-axis position.
pub const MAX_POSITION: i32 = 100;

/// Clamp a position into `MIN_POSITION..=MAX_POSITION`.
#[must_use]
pub fn clamp_position(value: i32) -> i32 {
    value.clamp(MIN_POSITION, MAX_POSITION)
}
