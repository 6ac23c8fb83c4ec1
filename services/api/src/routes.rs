use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use reflectiv::roleplay::{roleplay_router, RoleplaySessionService, ScoreStore, SessionStore};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes<S, P>(
    service: Arc<RoleplaySessionService<S, P>>,
) -> axum::Router
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    roleplay_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
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
    use crate::infra::{InMemoryScoreStore, InMemorySessionStore};
    use metrics_exporter_prometheus::PrometheusHandle;
    use std::sync::atomic::AtomicBool;
    use std::sync::OnceLock;
    use tower::ServiceExt;

    // `PrometheusMetricLayer::pair()` installs a process-global metrics recorder,
    // which can only be set once. Build the handle a single time and share it so
    // multiple tests in the same process don't collide on the second call.
    fn shared_handle() -> Arc<PrometheusHandle> {
        static HANDLE: OnceLock<Arc<PrometheusHandle>> = OnceLock::new();
        HANDLE
            .get_or_init(|| {
                let (_, handle) = axum_prometheus::PrometheusMetricLayer::pair();
                Arc::new(handle)
            })
            .clone()
    }

    fn test_router() -> axum::Router {
        let sessions = Arc::new(InMemorySessionStore::default());
        let scores = Arc::new(InMemoryScoreStore::default());
        let service = Arc::new(RoleplaySessionService::new(sessions, scores));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: shared_handle(),
        };
        with_service_routes(service).layer(Extension(state))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = test_router()
            .oneshot(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let response = test_router()
            .oneshot(
                axum::http::Request::get("/ready")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn score_endpoint_is_mounted() {
        let body = serde_json::json!({
            "turns": [
                { "speaker": "rep", "text": "What are your goals?" },
                { "speaker": "customer", "text": "Fewer callbacks." }
            ]
        });
        let response = test_router()
            .oneshot(
                axum::http::Request::post("/api/v1/score")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
