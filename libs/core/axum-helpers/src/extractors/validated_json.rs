//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{Form, FromRequest, Json, Request, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait
/// and rejects with the structured field error list if validation fails.
///
/// `application/x-www-form-urlencoded` bodies are accepted as well; every
/// form value arrives as a string. Any other non-JSON request is validated
/// as an empty object, so it fails on its required fields instead of with a
/// media type error.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(required, email)]
///     email: Option<String>,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {:?}", payload.email)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let data = if is_form_encoded(&req) {
            let Form(data) = Form::<T>::from_request(req, state).await.map_err(|e| {
                AppError::BadRequest(format!("Invalid form body: {}", e.body_text()))
                    .into_response()
            })?;
            data
        } else {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(data)) => data,
                Err(JsonRejection::MissingJsonContentType(_)) => {
                    serde_json::from_value(Value::Object(Map::new())).map_err(|e| {
                        AppError::BadRequest(format!("Invalid request body: {}", e))
                            .into_response()
                    })?
                }
                Err(rejection) => return Err(AppError::from(rejection).into_response()),
            }
        };

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}
