//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use coverctl_domain::error::{CoverError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CoverError`] to an HTTP response with appropriate status code.
pub struct ApiError(CoverError);

impl From<CoverError> for ApiError {
    fn from(err: CoverError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CoverError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CoverError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CoverError::Platform(err) => {
                tracing::error!(error = %err, "platform error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
