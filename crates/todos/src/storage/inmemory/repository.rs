//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoKey, TodoUpdate};

/// In-memory storage backend.
///
/// Mirrors the DynamoDB semantics: create overwrites, update and attachment
/// changes require an existing item, delete is idempotent.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<TodoKey, TodoItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(key: &TodoKey) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "TodoItem",
        id: key.to_string(),
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_todo(&self, key: &TodoKey) -> Result<Option<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos.get(key).cloned())
    }

    async fn create_todo(&self, item: &TodoItem) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(item.key(), item.clone());
        Ok(())
    }

    async fn update_todo(&self, key: &TodoKey, update: &TodoUpdate) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(key).ok_or_else(|| not_found(key))?;
        todo.apply_update(update);
        Ok(())
    }

    async fn delete_todo(&self, key: &TodoKey) -> Result<Option<TodoItem>> {
        let mut todos = self.todos.write().await;
        Ok(todos.remove(key))
    }

    async fn update_attachment_url(&self, key: &TodoKey, attachment_url: &str) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(key).ok_or_else(|| not_found(key))?;
        todo.attachment_url = Some(attachment_url.to_string());
        Ok(todo.clone())
    }
}
