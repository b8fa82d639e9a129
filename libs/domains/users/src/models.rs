use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Store-assigned identifier. Starts at 1 and is never reused.
pub type UserId = u64;

pub const FIRST_USER_ID: UserId = 1;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address (unique, compared case-sensitively)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
    /// Creation timestamp, never changes
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

/// Partial update; only `Some` fields overwrite the stored record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Every field is optional at the type level so that a missing field
/// produces a field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Valid email is required"),
        email(message = "Valid email is required")
    )]
    pub email: Option<String>,

    /// A number, or a string holding one
    #[validate(custom(function = "validate_age", message = "Age must be a number"))]
    #[schema(value_type = Option<f64>)]
    pub age: Option<Value>,
}

fn validate_age(age: &Value) -> Result<(), validator::ValidationError> {
    match numeric_age(age) {
        Some(_) => Ok(()),
        None => Err(validator::ValidationError::new("numeric")),
    }
}

/// Interprets a JSON value as a number, accepting numeric strings.
pub fn numeric_age(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Some(Number::from(n));
            }
            s.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .and_then(Number::from_f64)
        }
        _ => None,
    }
}

impl UserPayload {
    /// Call after validation; missing strings become empty.
    pub fn into_create(self) -> CreateUser {
        CreateUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            age: self.age.as_ref().and_then(numeric_age),
        }
    }

    pub fn into_update(self) -> UpdateUser {
        UpdateUser {
            age: self.age.as_ref().and_then(numeric_age),
            name: self.name,
            email: self.email,
        }
    }
}

impl User {
    pub fn new(id: UserId, input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `update`; id and `created_at` are untouched.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
