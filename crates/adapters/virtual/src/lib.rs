//! # coverctl-adapter-virtual
//!
//! Virtual/demo platform that simulates cover entities for testing and
//! demonstration purposes.
//!
//! ## Behaviour
//!
//! | Service | Requires | Effect |
//! |---------|----------|--------|
//! | `set_cover_position` | `set_position` | position = `position`; `open` unless 0 |
//! | `open_cover` | `open` | position 100, `open` |
//! | `close_cover` | `close` | position 0, `closed` |
//! | `stop_cover` | `stop` | settles an `opening`/`closing` cover; ignored without `stop` |
//! | `set_cover_tilt_position` | `set_tilt_position` | tilt = `tilt_position` |
//!
//! ## Dependency rule
//!
//! Depends on `coverctl-app` (port traits) and `coverctl-domain` only.

mod config;
mod cover;
mod error;

pub use config::VirtualCoverConfig;
pub use cover::VirtualCover;
pub use error::VirtualError;

use std::collections::HashMap;
use std::future::Future;

use coverctl_app::ports::CoverPlatform;
use coverctl_domain::cover::{AttributeValue, CoverState, ServiceCall, SupportedFeatures};
use coverctl_domain::error::{CoverError, NotFoundError};

/// In-memory platform holding a set of virtual covers.
#[derive(Default)]
pub struct VirtualPlatform {
    covers: HashMap<String, VirtualCover>,
}

impl VirtualPlatform {
    /// Build a platform exposing one cover per definition.
    #[must_use]
    pub fn new(definitions: impl IntoIterator<Item = VirtualCoverConfig>) -> Self {
        let covers = definitions
            .into_iter()
            .map(|def| (def.entity_id.clone(), VirtualCover::new(def)))
            .collect();
        Self { covers }
    }

    /// Look up a cover by entity id.
    #[must_use]
    pub fn cover(&self, entity_id: &str) -> Option<&VirtualCover> {
        self.covers.get(entity_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    fn find(&self, entity_id: &str) -> Result<&VirtualCover, CoverError> {
        self.covers.get(entity_id).ok_or_else(|| {
            NotFoundError {
                kind: "Entity",
                name: entity_id.to_string(),
            }
            .into()
        })
    }
}

impl CoverPlatform for VirtualPlatform {
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), CoverError>> + Send {
        let result = self.find(&call.entity_id).and_then(|cover| {
            tracing::debug!(%call, data = ?call.data, "virtual service call");
            cover.apply(&call).map_err(CoverError::from)
        });
        async { result }
    }

    fn supported_features(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<SupportedFeatures, CoverError>> + Send {
        let result = self.find(entity_id).map(VirtualCover::features);
        async { result }
    }

    fn get_state(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<CoverState, CoverError>> + Send {
        let result = self.find(entity_id).map(VirtualCover::state);
        async { result }
    }

    fn get_attribute(
        &self,
        entity_id: &str,
        attribute: &str,
    ) -> impl Future<Output = Result<Option<AttributeValue>, CoverError>> + Send {
        let result = self.find(entity_id).map(|cover| cover.attribute(attribute));
        async { result }
    }
}
