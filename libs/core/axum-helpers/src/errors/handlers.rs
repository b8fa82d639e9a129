use axum::{
    Json,
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;

use super::internal_error_response;

#[derive(Serialize)]
struct RouteNotFound {
    message: String,
}

/// Fallback for unmatched routes and unsupported methods.
///
/// Responds `404 {"message": "cannot <METHOD> <path>"}`, echoing the query string.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            message: format!("cannot {} {}", method, target),
        }),
    )
        .into_response()
}

/// Turns a handler panic into the generic 500 response.
///
/// The panic message is echoed in `error` only when `expose_detail` is set.
/// Wrap in a closure for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>, expose_detail: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");
    internal_error_response(&detail, expose_detail)
}
