use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

const SERVICE_NAME: &str = "hablai-backend";

/// GET / - service metadata
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "health": "/health",
        "languages": "/languages"
    }))
}

/// GET /health - liveness probe
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
