//! Users Domain
//!
//! CRUD over a volatile user store with email uniqueness and request
//! validation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required fields, email uniqueness, existence checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Id assignment and storage (trait + in-memory impl)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, inputs, request payload
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{ErrorKind, UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, UpdateUser, User, UserId, UserPayload};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
