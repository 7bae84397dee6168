//! JSON REST handlers for cover controllers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use coverctl_app::ports::CoverPlatform;
use coverctl_domain::cover::{ControllerStatus, CoverAction};
use coverctl_domain::device::DeviceEvent;

use crate::error::ApiError;
use crate::state::AppState;

/// A controller status tagged with its registry name.
#[derive(Serialize)]
pub struct ControllerView {
    pub name: String,
    #[serde(flatten)]
    pub status: ControllerStatus,
}

/// Outcome of an ingested device event.
#[derive(Serialize)]
pub struct EventOutcome {
    /// The cover action that ran, or `null` when the event was ignored.
    pub action: Option<CoverAction>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ControllerView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and invoke endpoints.
pub enum GetResponse {
    Ok(Json<ControllerView>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the event endpoint.
pub enum EventResponse {
    Ok(Json<EventOutcome>),
}

impl IntoResponse for EventResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/controllers`
pub async fn list<P>(State(state): State<AppState<P>>) -> ListResponse
where
    P: CoverPlatform + 'static,
{
    let views = state
        .registry
        .statuses()
        .into_iter()
        .map(|(name, status)| ControllerView { name, status })
        .collect();
    ListResponse::Ok(Json(views))
}

/// `GET /api/controllers/{name}`
pub async fn get<P>(
    State(state): State<AppState<P>>,
    Path(name): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: CoverPlatform + 'static,
{
    let status = state.registry.get(&name)?.status();
    Ok(GetResponse::Ok(Json(ControllerView { name, status })))
}

/// `POST /api/controllers/{name}/events`
pub async fn event<P>(
    State(state): State<AppState<P>>,
    Path(name): Path<String>,
    Json(event): Json<DeviceEvent>,
) -> Result<EventResponse, ApiError>
where
    P: CoverPlatform + 'static,
{
    let action = state.registry.dispatch_event(&name, &event).await?;
    Ok(EventResponse::Ok(Json(EventOutcome { action })))
}

/// `POST /api/controllers/{name}/actions/{action}`
pub async fn invoke<P>(
    State(state): State<AppState<P>>,
    Path((name, action)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    P: CoverPlatform + 'static,
{
    let action = CoverAction::from_str(&action)?;
    let status = state.registry.invoke(&name, action).await?;
    Ok(GetResponse::Ok(Json(ControllerView { name, status })))
}
