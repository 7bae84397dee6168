//! Device — remotes and switches that emit events, and how to read them.
//!
//! A [`Decoder`] turns a raw [`DeviceEvent`] into a canonical action name
//! (`"double"`, `"flip90"`, …). An [`ActionMapping`] then binds that name to a
//! [`CoverAction`](crate::cover::CoverAction).

mod aqara;
mod event;
mod generic;
mod mapping;

pub use aqara::{decode_click, decode_click_count, decode_cube};
pub use event::DeviceEvent;
pub use generic::decode_command;
pub use mapping::ActionMapping;

use serde::{Deserialize, Serialize};

use crate::cover::CoverAction;

/// Maps a raw device event to a canonical action name.
///
/// `None` means "no action": the event is valid but carries nothing to do,
/// or the payload is not one the decoder knows.
pub trait Decoder {
    fn decode(&self, event: &DeviceEvent) -> Option<String>;
}

/// Supported remote models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceModel {
    /// Aqara magic cube.
    #[serde(rename = "MFKZQ01LM")]
    AqaraCube,
    /// Aqara round wireless switch.
    #[serde(rename = "WXKG01LM")]
    AqaraRoundSwitch,
    /// Aqara mini wireless switch.
    #[serde(rename = "WXKG11LM")]
    AqaraMiniSwitch,
    /// Any device whose command name is the action.
    #[default]
    #[serde(rename = "generic")]
    Generic,
}

impl DeviceModel {
    /// Model identifier as printed on the device.
    #[must_use]
    pub fn model_id(self) -> &'static str {
        match self {
            Self::AqaraCube => "MFKZQ01LM",
            Self::AqaraRoundSwitch => "WXKG01LM",
            Self::AqaraMiniSwitch => "WXKG11LM",
            Self::Generic => "generic",
        }
    }

    /// Cover bindings used when the controller does not configure `mapping`.
    #[must_use]
    pub fn default_cover_mapping(self) -> ActionMapping {
        match self {
            Self::AqaraCube => ActionMapping::new()
                .with("flip90", CoverAction::ToggleOpen)
                .with("flip180", CoverAction::ToggleClose)
                .with("rotate_right", CoverAction::SetTiltUp)
                .with("rotate_left", CoverAction::SetTiltDown)
                .with("shake", CoverAction::Stop),
            Self::AqaraRoundSwitch => ActionMapping::new()
                .with("single", CoverAction::ToggleOpen)
                .with("double", CoverAction::ToggleClose)
                .with("triple", CoverAction::Stop),
            Self::AqaraMiniSwitch => ActionMapping::new()
                .with("single", CoverAction::ToggleOpen)
                .with("double", CoverAction::ToggleClose),
            Self::Generic => ActionMapping::new(),
        }
    }
}

impl Decoder for DeviceModel {
    fn decode(&self, event: &DeviceEvent) -> Option<String> {
        match self {
            Self::AqaraCube => decode_cube(event),
            Self::AqaraRoundSwitch => decode_click(event),
            Self::AqaraMiniSwitch => decode_click_count(event),
            Self::Generic => decode_command(event),
        }
    }
}

impl std::fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model_id())
    }
}
