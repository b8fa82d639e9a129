pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Message sent for every unexpected server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something broke!";

/// Failure body for errors raised after the request passed validation.
///
/// ```json
/// { "success": false, "message": "User not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Failure body for requests rejected by input validation.
///
/// ```json
/// {
///   "success": false,
///   "errors": [
///     { "type": "field", "path": "email", "msg": "Valid email is required", "location": "body" }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

/// Failure body for unexpected errors. `error` is `{}` unless detail exposure is enabled.
#[derive(Debug, Serialize, ToSchema)]
pub struct InternalErrorResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object)]
    pub error: Value,
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the offending field or path parameter
    pub path: String,
    /// Human-readable reason
    pub msg: String,
    /// Where the field came from: `body` or `params`
    pub location: String,
    /// Rejected value, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
}

impl FieldError {
    pub fn new(
        path: impl Into<String>,
        msg: impl Into<String>,
        location: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            path: path.into(),
            msg: msg.into(),
            location: location.into(),
            value,
        }
    }

    /// A rejected path parameter, echoing the raw value back.
    pub fn param(path: impl Into<String>, msg: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(path, msg, "params", Some(Value::String(value.into())))
    }

    /// Flatten `validator` output into a list ordered by field name.
    pub fn from_validation_errors(errors: &ValidationErrors, location: &str) -> Vec<Self> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        fields
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                    Self::new(
                        field.to_string(),
                        msg,
                        location,
                        err.params.get("value").filter(|v| !v.is_null()).cloned(),
                    )
                })
            })
            .collect()
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(FieldError::from_validation_errors(&errors, "body"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(status = %e.status(), "JSON extraction error: {}", e.body_text());
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.body_text()))).into_response()
            }
            AppError::Validation(errors) => {
                tracing::info!(fields = errors.len(), "Validation error: {:?}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse {
                        success: false,
                        errors,
                    }),
                )
                    .into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(msg))).into_response()
            }
        }
    }
}

/// Builds the 500 response. `detail` is echoed only when `expose_detail` is set.
pub fn internal_error_response(detail: &str, expose_detail: bool) -> Response {
    let error = if expose_detail {
        Value::String(detail.to_string())
    } else {
        Value::Object(Default::default())
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(InternalErrorResponse {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            error,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Valid email is required"))]
        email: String,
    }

    #[test]
    fn test_field_errors_are_sorted_by_path() {
        let sample = Sample {
            name: String::new(),
            email: "nope".to_string(),
        };
        let errors = sample.validate().unwrap_err();
        let fields = FieldError::from_validation_errors(&errors, "body");

        let paths: Vec<_> = fields.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["email", "name"]);
        assert_eq!(fields[0].msg, "Valid email is required");
        assert_eq!(fields[0].location, "body");
        assert_eq!(fields[0].kind, "field");
    }

    #[derive(Validate)]
    struct Required {
        #[validate(required(message = "Name is required"))]
        name: Option<String>,
        #[validate(email(message = "Valid email is required"))]
        email: String,
    }

    #[test]
    fn test_absent_field_has_no_value() {
        let sample = Required {
            name: None,
            email: "nope".to_string(),
        };
        let errors = sample.validate().unwrap_err();
        let fields = FieldError::from_validation_errors(&errors, "body");

        assert_eq!(fields[0].path, "email");
        assert_eq!(fields[0].value, Some(Value::String("nope".to_string())));
        assert_eq!(fields[1].path, "name");
        assert_eq!(fields[1].value, None);

        let body = serde_json::to_value(&fields[1]).unwrap();
        assert!(body.get("value").is_none());
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_message() {
        let response = AppError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body, serde_json::json!({ "success": false, "message": "User not found" }));
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_errors() {
        let response =
            AppError::Validation(vec![FieldError::param("id", "Invalid user ID", "abc")])
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["path"], "id");
        assert_eq!(body["errors"][0]["location"], "params");
        assert_eq!(body["errors"][0]["value"], "abc");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail_by_default() {
        let response = internal_error_response("db exploded", false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(body["error"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_internal_error_shows_detail_when_exposed() {
        let body = json_body(internal_error_response("db exploded", true)).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "db exploded");
    }
}
