//! Typed attribute values read from a cover entity.

use serde::{Deserialize, Serialize};

/// Name of the attribute holding the current slat angle (0–100).
pub const CURRENT_TILT_POSITION: &str = "current_tilt_position";

/// Name of the attribute holding the current main-axis position (0–100).
pub const CURRENT_POSITION: &str = "current_position";

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Interpret the value as a whole number, if it is numeric.
    ///
    /// Floats are rounded; values outside the `i32` range yield `None`.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(v) => i32::try_from(*v).ok(),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(v) if v.is_finite() && v.abs() <= f64::from(i32::MAX) => {
                Some(v.round() as i32)
            }
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}
