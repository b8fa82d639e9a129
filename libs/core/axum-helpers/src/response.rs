//! Success envelope shared by every JSON endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"success": true, "message": ..., "data": ..., "count"?: n}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    /// Only present on collection responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Collection response; `count` is the number of items in `data`.
    pub fn collection(data: Vec<T>, message: impl Into<String>) -> Self {
        let count = data.len();
        Self {
            count: Some(count),
            ..Self::success(data, message)
        }
    }
}
