use axum::Router;

pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `axum_helpers::create_router`.
pub fn routes() -> Router {
    Router::new().nest("/users", users::router())
}
