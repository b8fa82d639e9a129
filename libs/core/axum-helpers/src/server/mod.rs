//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with docs, health, fallback and panic handling
//! - The `/health` liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router::<ApiDoc>(api_routes, false);
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_handler, health_router};
pub use shutdown::shutdown_signal;
