//! API request types for todo operations.
//!
//! Pure data types with no I/O. Conversions take the clock value and id as
//! arguments so they stay deterministic.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::types::{TodoItem, TodoUpdate};

/// Request payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    pub due_date: String,
}

impl CreateTodoRequest {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
        }
    }

    /// Builds a fresh, not-done item owned by `user_id`.
    pub fn into_item(
        self,
        user_id: impl Into<String>,
        todo_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> TodoItem {
        TodoItem {
            user_id: user_id.into(),
            todo_id: todo_id.into(),
            name: self.name,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            due_date: self.due_date,
            done: false,
            attachment_url: None,
        }
    }
}

/// Request payload for updating a todo. Every mutable field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

impl From<UpdateTodoRequest> for TodoUpdate {
    fn from(request: UpdateTodoRequest) -> Self {
        TodoUpdate {
            name: request.name,
            due_date: request.due_date,
            done: request.done,
        }
    }
}

/// Request payload for recording an attachment URL on a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRequest {
    pub attachment_url: String,
}
