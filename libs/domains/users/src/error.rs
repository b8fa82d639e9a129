use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and email are required";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";
pub const NOT_FOUND_MESSAGE: &str = "User not found";

/// Business rule violations raised by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),
}

/// Discriminant of [`UserError`], used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
}

impl UserError {
    pub fn missing_required_fields() -> Self {
        UserError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }

    pub fn duplicate_email() -> Self {
        UserError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string())
    }

    pub fn not_found() -> Self {
        UserError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) => ErrorKind::Validation,
            UserError::Conflict(_) => ErrorKind::Conflict,
            UserError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            UserError::Validation(msg) | UserError::Conflict(msg) | UserError::NotFound(msg) => {
                msg
            }
        }
    }
}

pub type UserResult<T> = Result<T, UserError>;

/// Only a missing user surfaces as 404; every other rule violation is a 400.
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => AppError::NotFound(err.to_string()),
            ErrorKind::Validation | ErrorKind::Conflict => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
