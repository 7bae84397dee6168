//! Virtual adapter error types.

use coverctl_domain::cover::CoverService;
use coverctl_domain::error::CoverError;

/// Errors specific to the virtual platform.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// The cover does not declare the capability the service needs.
    #[error("`{entity_id}` does not support {service}")]
    Unsupported {
        entity_id: String,
        service: CoverService,
    },

    /// A required service parameter is absent or not an integer.
    #[error("{service} requires an integer `{parameter}`")]
    MissingParameter {
        service: CoverService,
        parameter: &'static str,
    },
}

impl From<VirtualError> for CoverError {
    fn from(err: VirtualError) -> Self {
        CoverError::Platform(Box::new(err))
    }
}
