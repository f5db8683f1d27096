use serde::{Deserialize, Serialize};

/// A single todo item as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier, always positive
    pub id: i64,
    /// Normalized title (trimmed, no newlines, max 200 characters)
    pub title: String,
    pub completed: bool,
    /// Creation timestamp in UTC, formatted as `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

/// Body of `POST /api/todos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

/// Body of `PUT /api/todos/:id`
///
/// At least one field must be present. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Acknowledgement returned by `DELETE /api/todos/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    pub ok: bool,
}

/// Error body returned by every failing API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}
