//! # Axum Helpers
//!
//! HTTP plumbing shared by the service binaries.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`errors`]**: `AppError` and the JSON failure bodies
//! - **[`extractors`]**: Validating extractors (`ValidatedJson`, `IdPath`)
//! - **[`response`]**: The `ApiResponse` success envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new(), false);
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod response;
pub mod server;

pub use errors::{
    AppError, ErrorResponse, FieldError, InternalErrorResponse, ValidationErrorResponse,
};
pub use extractors::{IdPath, ValidatedJson};
pub use response::ApiResponse;
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
