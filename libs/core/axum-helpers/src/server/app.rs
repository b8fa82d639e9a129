use super::health::health_router;
use super::shutdown::shutdown_signal;
use crate::errors::handlers::{handle_panic, not_found};
use axum::{Json, Router, routing::get};
use core_config::server::ServerConfig;
use std::any::Any;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     create_app(Router::new(), &ServerConfig::default()).await
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps the API routes with the cross-cutting HTTP surface.
///
/// This function sets up:
/// - `GET /health`
/// - `GET /api-docs/openapi.json` generated from `T`
/// - API routes nested under `/api`
/// - A 404 fallback for unknown paths and unsupported methods
/// - Request tracing and panic-to-500 conversion
///
/// `expose_error_detail` controls whether a 500 body carries the panic
/// message; callers enable it only for an explicit development setup.
///
/// Domain routers should apply their own state before being passed in.
pub fn create_router<T>(apis: Router, expose_error_detail: bool) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(health_router())
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| handle_panic(err, expose_error_detail),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
