//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod controllers;

use axum::Router;
use axum::routing::{get, post};

use coverctl_app::ports::CoverPlatform;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<P>() -> Router<AppState<P>>
where
    P: CoverPlatform + 'static,
{
    Router::new()
        .route("/controllers", get(controllers::list::<P>))
        .route("/controllers/{name}", get(controllers::get::<P>))
        .route("/controllers/{name}/events", post(controllers::event::<P>))
        .route(
            "/controllers/{name}/actions/{action}",
            post(controllers::invoke::<P>),
        )
}
