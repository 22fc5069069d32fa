use crate::dtos::MessageResponse;
use crate::services::{get_metrics, StorageError};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = MessageResponse)
    ),
    tag = "Observability"
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Luxury Catering API running".to_string(),
    })
}

/// Liveness. Storage is reported under `checks` and never turns this into an error.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = "Observability"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let mongodb = match state.store.health_check().await {
        Ok(()) => "up",
        Err(StorageError::Unconfigured(_)) => "unconfigured",
        Err(_) => "down",
    };

    Json(json!({
        "status": "ok",
        "service": "catering-service",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "mongodb": mongodb
        }
    }))
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", content_type = "text/plain")
    ),
    tag = "Observability"
)]
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
