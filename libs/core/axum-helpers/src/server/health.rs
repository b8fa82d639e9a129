use axum::{Json, Router, routing::get};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339, millisecond precision, UTC
    pub timestamp: String,
}

/// Liveness endpoint. Always 200 while the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Router exposing `GET /health`.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
