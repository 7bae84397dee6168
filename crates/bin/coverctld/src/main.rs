//! # coverctld — coverctl daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` with the configured filter
//! - Construct the platform adapter (virtual covers)
//! - Construct one cover controller per `[[controllers]]` entry and register
//!   it with its device binding
//! - Build the axum router, injecting the registry
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use coverctl_adapter_http_axum::state::AppState;
use coverctl_adapter_virtual::VirtualPlatform;
use coverctl_app::ports::CoverPlatform;
use coverctl_app::services::cover_controller::CoverController;
use coverctl_app::services::registry::{ControllerRegistry, DeviceBinding};
use coverctl_domain::error::CoverError;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ControllerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Platform
    let platform = Arc::new(VirtualPlatform::new(config.virtual_covers.iter().cloned()));
    tracing::info!(covers = platform.len(), "virtual platform ready");

    // Controllers
    let registry = build_registry(&platform, &config.controllers)?;
    if registry.is_empty() {
        tracing::warn!("no controllers configured");
    }

    // HTTP
    let app = coverctl_adapter_http_axum::router::build(AppState::new(registry));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "coverctld listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("coverctld stopped");
    Ok(())
}

/// Build a controller per entry, all sharing `platform`.
fn build_registry<P>(
    platform: &Arc<P>,
    controllers: &[ControllerConfig],
) -> Result<ControllerRegistry<Arc<P>>, CoverError>
where
    P: CoverPlatform + 'static,
{
    let mut registry = ControllerRegistry::new();
    for entry in controllers {
        let controller = CoverController::new(Arc::clone(platform), entry.cover.clone())?;
        let binding = DeviceBinding::configure(
            entry.device,
            entry.mapping.clone(),
            entry.merge_mapping.clone(),
        )?;
        registry.register(entry.name.clone(), controller, binding)?;
    }
    Ok(registry)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
