use crate::state::ServeState;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rutcheck_browser::lookup;
use rutcheck_core::RutRequest;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: ServeState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/consultar-rut", post(consultar_rut_handler))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// One request, one disposable browser session.
///
/// Domain-level outcomes (missing controls, portal rejection) travel inside
/// the 200 body; only infrastructure failures become a 500.
async fn consultar_rut_handler(
    State(state): State<ServeState>,
    Json(request): Json<RutRequest>,
) -> Response {
    let permit = match state.sessions.clone().acquire_owned().await {
        Ok(permit) => permit,
        Err(_) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "server is shutting down" })),
            )
                .into_response();
        }
    };

    tracing::info!("Lookup requested for rut {}", request.rut);

    let result = lookup(
        &state.chrome_path,
        &state.session,
        &state.portal_url,
        &request.rut,
    )
    .await;
    drop(permit);

    match result {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            tracing::error!("Lookup pipeline failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rutcheck_browser::SessionConfig;
    use std::path::PathBuf;
    use tower::util::ServiceExt;

    fn test_state() -> ServeState {
        ServeState::new(
            PathBuf::from("/nonexistent/chrome"),
            SessionConfig::default(),
            "http://localhost:1",
            1,
        )
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = build_router(test_state());
        let response = router
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
    async fn test_unknown_route_is_not_found() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_route_rejects_get() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/consultar-rut")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_lookup_route_requires_json_body() {
        let router = build_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/consultar-rut")
                    .body(Body::from("rut=1-9"))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Missing content-type: axum rejects before the handler runs
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
