//! Positive integer path parameter extractor.

use crate::errors::{AppError, FieldError};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

pub const INVALID_ID_MESSAGE: &str = "ID must be a positive integer";

/// Extractor for a single numeric `id` path parameter.
///
/// Accepts integers >= 1. Anything else is rejected with a field error
/// located in `params` before the handler runs.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub u64);

impl IdPath {
    pub fn parse(raw: &str) -> Option<u64> {
        raw.parse::<u64>().ok().filter(|id| *id > 0)
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Self::parse(&raw) {
            Some(id) => Ok(IdPath(id)),
            None => Err(
                AppError::Validation(vec![FieldError::param("id", INVALID_ID_MESSAGE, raw)])
                    .into_response(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_positive_integers() {
        assert_eq!(IdPath::parse("1"), Some(1));
        assert_eq!(IdPath::parse("999"), Some(999));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for raw in ["0", "-3", "abc", "1.5", "", "12abc"] {
            assert_eq!(IdPath::parse(raw), None, "{raw:?} should be rejected");
        }
    }
}
