//! Controller registry — routes device events and direct actions to named
//! cover controllers.

use std::collections::BTreeMap;

use coverctl_domain::cover::{ControllerStatus, CoverAction};
use coverctl_domain::device::{ActionMapping, Decoder, DeviceEvent, DeviceModel};
use coverctl_domain::error::{CoverError, NotFoundError, ValidationError};

use crate::ports::CoverPlatform;
use crate::services::cover_controller::CoverController;

/// How events from one remote reach its controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBinding {
    pub device: DeviceModel,
    pub mapping: ActionMapping,
}

impl DeviceBinding {
    /// Bind `device` with its default cover mapping.
    #[must_use]
    pub fn with_defaults(device: DeviceModel) -> Self {
        Self {
            device,
            mapping: device.default_cover_mapping(),
        }
    }

    /// Resolve the effective mapping for `device`.
    ///
    /// `mapping` replaces the device defaults; `merge_mapping` is laid over
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ConflictingMappings`] when both are given.
    pub fn configure(
        device: DeviceModel,
        mapping: Option<ActionMapping>,
        merge_mapping: Option<ActionMapping>,
    ) -> Result<Self, CoverError> {
        let mapping = match (mapping, merge_mapping) {
            (Some(_), Some(_)) => return Err(ValidationError::ConflictingMappings.into()),
            (Some(mapping), None) => mapping,
            (None, Some(overlay)) => device.default_cover_mapping().merged(&overlay),
            (None, None) => device.default_cover_mapping(),
        };
        Ok(Self { device, mapping })
    }

    /// Decode `event` and look up the bound cover action.
    ///
    /// Returns the decoded device action (if any) and the cover action bound
    /// to it (if any).
    #[must_use]
    pub fn resolve(&self, event: &DeviceEvent) -> (Option<String>, Option<CoverAction>) {
        let decoded = self.device.decode(event);
        let action = decoded.as_deref().and_then(|name| self.mapping.get(name));
        (decoded, action)
    }
}

struct Registered<P> {
    controller: CoverController<P>,
    binding: DeviceBinding,
}

/// Named cover controllers and their device bindings.
pub struct ControllerRegistry<P> {
    controllers: BTreeMap<String, Registered<P>>,
}

impl<P> Default for ControllerRegistry<P> {
    fn default() -> Self {
        Self {
            controllers: BTreeMap::new(),
        }
    }
}

impl<P: CoverPlatform> ControllerRegistry<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a controller under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::Validation`] when `name` is empty or already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        controller: CoverController<P>,
        binding: DeviceBinding,
    ) -> Result<(), CoverError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.controllers.contains_key(&name) {
            return Err(ValidationError::DuplicateName(name).into());
        }
        tracing::info!(
            controller = %name,
            cover = %controller.cover(),
            device = %binding.device,
            bindings = binding.mapping.len(),
            "registered controller"
        );
        self.controllers.insert(
            name,
            Registered {
                controller,
                binding,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Look up a controller by name.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::NotFound`] when no controller is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&CoverController<P>, CoverError> {
        self.registered(name).map(|r| &r.controller)
    }

    /// Status of every controller, ordered by name.
    #[must_use]
    pub fn statuses(&self) -> Vec<(String, ControllerStatus)> {
        self.controllers
            .iter()
            .map(|(name, r)| (name.clone(), r.controller.status()))
            .collect()
    }

    /// Decode a device event for `name` and run the bound cover action.
    ///
    /// Returns the action that ran, or `None` when the event decodes to
    /// nothing or to an unmapped device action.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::NotFound`] for an unknown controller, or a
    /// platform error raised by the action.
    #[tracing::instrument(skip(self, event))]
    pub async fn dispatch_event(
        &self,
        name: &str,
        event: &DeviceEvent,
    ) -> Result<Option<CoverAction>, CoverError> {
        let registered = self.registered(name)?;
        let (decoded, action) = registered.binding.resolve(event);
        let Some(action) = action else {
            tracing::debug!(
                device = %registered.binding.device,
                decoded = ?decoded,
                "event ignored: no bound action"
            );
            return Ok(None);
        };
        tracing::debug!(decoded = ?decoded, %action, "dispatching cover action");
        registered.controller.handle(action).await?;
        Ok(Some(action))
    }

    /// Run `action` on controller `name` directly.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::NotFound`] for an unknown controller, or a
    /// platform error raised by the action.
    #[tracing::instrument(skip(self))]
    pub async fn invoke(
        &self,
        name: &str,
        action: CoverAction,
    ) -> Result<ControllerStatus, CoverError> {
        let controller = self.get(name)?;
        controller.handle(action).await?;
        Ok(controller.status())
    }

    fn registered(&self, name: &str) -> Result<&Registered<P>, CoverError> {
        self.controllers.get(name).ok_or_else(|| {
            NotFoundError {
                kind: "Controller",
                name: name.to_string(),
            }
            .into()
        })
    }
}
