//! Virtual cover definitions.

use serde::Deserialize;

use coverctl_domain::cover::{CoverState, SupportedFeatures};

/// Describes one simulated cover.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VirtualCoverConfig {
    /// Entity id the cover is exposed under (e.g. `cover.virtual_blinds`).
    pub entity_id: String,
    /// Declared capabilities, as a list of feature names.
    #[serde(default)]
    pub features: SupportedFeatures,
    /// Initial state.
    #[serde(default = "default_state")]
    pub state: CoverState,
    /// Initial main-axis position (0–100).
    #[serde(default)]
    pub position: i32,
    /// Initial tilt position (0–100).
    #[serde(default)]
    pub tilt: i32,
}

fn default_state() -> CoverState {
    CoverState::Closed
}

impl VirtualCoverConfig {
    /// A closed cover at position 0 with the given capabilities.
    #[must_use]
    pub fn new(entity_id: impl Into<String>, features: SupportedFeatures) -> Self {
        Self {
            entity_id: entity_id.into(),
            features,
            state: default_state(),
            position: 0,
            tilt: 0,
        }
    }
}
