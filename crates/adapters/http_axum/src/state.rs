//! Shared application state for axum handlers.

use std::sync::Arc;

use coverctl_app::ports::CoverPlatform;
use coverctl_app::services::registry::ControllerRegistry;

/// Application state shared across all axum handlers.
///
/// Generic over the platform type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the platform itself does not need to be `Clone`.
pub struct AppState<P> {
    /// Named controllers and their device bindings.
    pub registry: Arc<ControllerRegistry<P>>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<P> AppState<P>
where
    P: CoverPlatform + 'static,
{
    /// Create a new application state, taking ownership of the registry.
    pub fn new(registry: ControllerRegistry<P>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
