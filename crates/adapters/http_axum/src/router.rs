//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use coverctl_app::ports::CoverPlatform;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<P>(state: AppState<P>) -> Router
where
    P: CoverPlatform + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use coverctl_app::services::registry::ControllerRegistry;
    use coverctl_domain::cover::{AttributeValue, CoverState, ServiceCall, SupportedFeatures};
    use coverctl_domain::error::CoverError;
    use std::future::Future;
    use tower::ServiceExt;

    struct StubPlatform;

    impl CoverPlatform for StubPlatform {
        fn call_service(
            &self,
            _call: ServiceCall,
        ) -> impl Future<Output = Result<(), CoverError>> + Send {
            async { Ok(()) }
        }

        fn supported_features(
            &self,
            _entity_id: &str,
        ) -> impl Future<Output = Result<SupportedFeatures, CoverError>> + Send {
            async { Ok(SupportedFeatures::none()) }
        }

        fn get_state(
            &self,
            _entity_id: &str,
        ) -> impl Future<Output = Result<CoverState, CoverError>> + Send {
            async { Ok(CoverState::Unknown) }
        }

        fn get_attribute(
            &self,
            _entity_id: &str,
            _attribute: &str,
        ) -> impl Future<Output = Result<Option<AttributeValue>, CoverError>> + Send {
            async { Ok(None) }
        }
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(AppState::new(ControllerRegistry::<StubPlatform>::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        let app = build(AppState::new(ControllerRegistry::<StubPlatform>::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
