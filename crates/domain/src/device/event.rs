//! Raw event payload emitted by a remote or switch.

use serde::{Deserialize, Serialize};

/// An incoming device event: a command name plus optional arguments.
///
/// Mirrors the shape of ZHA `zha_event` payloads, e.g.
/// `{"command": "flip", "args": {"flip_degrees": 90}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceEvent {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: serde_json::Map<String, serde_json::Value>,
}

impl DeviceEvent {
    /// An event with a command and no arguments.
    #[must_use]
    pub fn command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            args: serde_json::Map::new(),
        }
    }

    /// Attach an argument.
    #[must_use]
    pub fn with_arg(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.args.insert(key.to_string(), value.into());
        self
    }

    /// The command name, if any.
    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// An integer argument.
    #[must_use]
    pub fn int_arg(&self, key: &str) -> Option<i64> {
        self.args.get(key).and_then(serde_json::Value::as_i64)
    }

    /// A string argument.
    #[must_use]
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(serde_json::Value::as_str)
    }
}
