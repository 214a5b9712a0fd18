//! Business logic for todo items.
//!
//! Sits between the HTTP handlers and the repository: validates payloads,
//! checks that referenced items exist, and generates ids and timestamps.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use todos_core::storage::{RepositoryError, TodoRepository};
use todos_core::todo::{
    validate_attachment, validate_create, validate_update, AttachmentRequest, CreateTodoRequest,
    TodoError, TodoItem, TodoKey, UpdateTodoRequest,
};

/// Errors returned by [`TodoService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] TodoError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Todo operations on behalf of an authenticated user.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Lists the user's todo items.
    pub async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        Ok(self.repo.list_todos(user_id).await?)
    }

    /// Gets one of the user's items, failing with `NotFound` when absent.
    pub async fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<TodoItem> {
        let key = TodoKey::new(todo_id, user_id);
        self.find(&key).await
    }

    /// Creates a new item for the user.
    pub async fn create_todo(
        &self,
        user_id: &str,
        request: CreateTodoRequest,
    ) -> Result<TodoItem> {
        validate_create(&request)?;

        let todo_id = Uuid::new_v4().to_string();
        let item = request.into_item(user_id, todo_id, Utc::now());
        self.repo.create_todo(&item).await?;

        tracing::info!(user_id, todo_id = %item.todo_id, "Created todo");
        Ok(item)
    }

    /// Replaces the mutable fields of one of the user's items.
    pub async fn update_todo(
        &self,
        user_id: &str,
        todo_id: &str,
        request: UpdateTodoRequest,
    ) -> Result<()> {
        validate_update(&request)?;

        let key = TodoKey::new(todo_id, user_id);
        self.find(&key).await?;
        self.repo.update_todo(&key, &request.into()).await?;

        tracing::info!(user_id, todo_id, "Updated todo");
        Ok(())
    }

    /// Deletes one of the user's items. Returns whether an item was removed.
    pub async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<bool> {
        let key = TodoKey::new(todo_id, user_id);
        let removed = self.repo.delete_todo(&key).await?.is_some();

        tracing::info!(user_id, todo_id, removed, "Deleted todo");
        Ok(removed)
    }

    /// Records an already-resolved attachment URL on one of the user's items.
    ///
    /// Returns the item as stored after the write.
    pub async fn set_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
        request: AttachmentRequest,
    ) -> Result<TodoItem> {
        validate_attachment(&request)?;

        let key = TodoKey::new(todo_id, user_id);
        let item = self
            .repo
            .update_attachment_url(&key, &request.attachment_url)
            .await?;

        tracing::info!(user_id, todo_id, "Attached file to todo");
        Ok(item)
    }

    async fn find(&self, key: &TodoKey) -> Result<TodoItem> {
        self.repo.get_todo(key).await?.ok_or_else(|| {
            RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: key.to_string(),
            }
            .into()
        })
    }
}
