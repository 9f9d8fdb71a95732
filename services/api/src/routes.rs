use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use resilience_index::api::{analytics_router, AnalyticsState};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Analytics endpoints plus the operational probes.
pub(crate) fn with_operational_routes(state: Arc<AnalyticsState>) -> Router {
    analytics_router(state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use resilience_index::config::SimulationConfig;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
        };
        let analytics = Arc::new(AnalyticsState::new(SimulationConfig {
            latency: Duration::ZERO,
            random_seed: Some(7),
        }));
        with_operational_routes(analytics).layer(Extension(state))
    }

    async fn status_of(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes")
            .status()
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        assert_eq!(status_of(app(false), "/ready").await, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_of(app(true), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_and_metrics_respond() {
        assert_eq!(status_of(app(true), "/health").await, StatusCode::OK);
        assert_eq!(status_of(app(true), "/metrics").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn analytics_routes_are_mounted() {
        assert_eq!(
            status_of(app(true), "/api/resilience-score?region=PA").await,
            StatusCode::OK
        );
        assert_eq!(
            status_of(app(true), "/api/predictions").await,
            StatusCode::BAD_REQUEST
        );
    }
}
