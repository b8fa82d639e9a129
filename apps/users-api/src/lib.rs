//! Users API application
//!
//! Wires the users domain into the shared HTTP surface: `/health`,
//! `/api-docs/openapi.json`, `/api/users` and the 404/500 fallbacks.

use axum::Router;

pub mod api;
pub mod config;
pub mod openapi;

/// Build the complete application router with a fresh, empty user store.
///
/// `expose_error_detail` is passed through to the 500 handler.
pub fn app(expose_error_detail: bool) -> Router {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(), expose_error_detail)
}
