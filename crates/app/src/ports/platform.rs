//! Platform port — the automation platform's entity store and service bus.
//!
//! The controller never owns cover state: it asks the platform what an
//! entity supports and reports, and sends it service calls.

use std::future::Future;

use coverctl_domain::cover::{
    AttributeValue, CoverFeature, CoverState, ServiceCall, SupportedFeatures,
};
use coverctl_domain::error::CoverError;

/// Access to cover entities on the automation platform.
///
/// Implemented by adapter crates (e.g. `adapter_virtual`) and by test spies.
pub trait CoverPlatform: Send + Sync {
    /// Invoke a service. Fire-and-forget: success means the platform
    /// accepted the call, not that the cover finished moving.
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), CoverError>> + Send;

    /// The capability flags declared by `entity_id`.
    fn supported_features(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<SupportedFeatures, CoverError>> + Send;

    /// The current state of `entity_id`.
    fn get_state(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<CoverState, CoverError>> + Send;

    /// A named attribute of `entity_id`, or `None` when it is not set.
    fn get_attribute(
        &self,
        entity_id: &str,
        attribute: &str,
    ) -> impl Future<Output = Result<Option<AttributeValue>, CoverError>> + Send;

    /// Convenience: whether `entity_id` declares `feature`.
    fn is_supported(
        &self,
        entity_id: &str,
        feature: CoverFeature,
    ) -> impl Future<Output = Result<bool, CoverError>> + Send {
        async move {
            let features = self.supported_features(entity_id).await?;
            Ok(features.contains(feature))
        }
    }
}

impl<T: CoverPlatform> CoverPlatform for std::sync::Arc<T> {
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), CoverError>> + Send {
        T::call_service(self, call)
    }

    fn supported_features(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<SupportedFeatures, CoverError>> + Send {
        T::supported_features(self, entity_id)
    }

    fn get_state(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<CoverState, CoverError>> + Send {
        T::get_state(self, entity_id)
    }

    fn get_attribute(
        &self,
        entity_id: &str,
        attribute: &str,
    ) -> impl Future<Output = Result<Option<AttributeValue>, CoverError>> + Send {
        T::get_attribute(self, entity_id, attribute)
    }
}
