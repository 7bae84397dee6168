//! Action mapping — decoded device action name to cover action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cover::CoverAction;

/// Lookup table from a decoded device action (e.g. `"double"`) to a
/// [`CoverAction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionMapping(BTreeMap<String, CoverAction>);

impl ActionMapping {
    /// An empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, device_action: impl Into<String>, action: CoverAction) -> Self {
        self.0.insert(device_action.into(), action);
        self
    }

    /// The cover action bound to `device_action`.
    #[must_use]
    pub fn get(&self, device_action: &str) -> Option<CoverAction> {
        self.0.get(device_action).copied()
    }

    /// Overlay `other` on top of `self`; entries from `other` win.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, CoverAction)> for ActionMapping {
    fn from_iter<I: IntoIterator<Item = (String, CoverAction)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
