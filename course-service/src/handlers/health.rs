use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe with collection sizes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "course-service",
        "version": env!("CARGO_PKG_VERSION"),
        "lessons": state.store.lesson_count().await,
        "modules": state.store.module_count().await,
    }))
}

/// Readiness probe. The store lives in memory, so the service is ready as
/// soon as it accepts connections; an unreachable model only means fallback
/// lessons.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
