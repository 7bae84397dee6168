//! Service calls — commands sent to the automation platform for a cover entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cover service exposed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverService {
    SetCoverPosition,
    OpenCover,
    CloseCover,
    StopCover,
    SetCoverTiltPosition,
}

impl CoverService {
    /// The service name without its domain (e.g. `"open_cover"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SetCoverPosition => "set_cover_position",
            Self::OpenCover => "open_cover",
            Self::CloseCover => "close_cover",
            Self::StopCover => "stop_cover",
            Self::SetCoverTiltPosition => "set_cover_tilt_position",
        }
    }
}

/// Rendered as `cover/<name>`.
impl fmt::Display for CoverService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cover/{}", self.name())
    }
}

/// A single service invocation against one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub service: CoverService,
    pub entity_id: String,
    /// Extra service parameters (`position`, `tilt_position`, …).
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl ServiceCall {
    /// A call without parameters.
    #[must_use]
    pub fn new(service: CoverService, entity_id: impl Into<String>) -> Self {
        Self {
            service,
            entity_id: entity_id.into(),
            data: serde_json::Map::new(),
        }
    }

    /// Attach a parameter to the call.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// Read an integer parameter back.
    #[must_use]
    pub fn int_param(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(serde_json::Value::as_i64)
    }
}

impl fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.service, self.entity_id)
    }
}
