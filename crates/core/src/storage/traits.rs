use async_trait::async_trait;

use crate::todo::{TodoItem, TodoKey, TodoUpdate};

use super::Result;

/// Data-access contract for todo items.
///
/// Implementations translate each call into exactly one store round-trip and
/// keep no cached state. They perform no business validation: the user id in
/// a key is used as a literal partition component.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists every item owned by `user_id`, in store order.
    async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Gets a single item, or `None` if nothing is stored at `key`.
    async fn get_todo(&self, key: &TodoKey) -> Result<Option<TodoItem>>;

    /// Writes the full item. An existing item at the same key is overwritten.
    async fn create_todo(&self, item: &TodoItem) -> Result<()>;

    /// Replaces `name`, `due_date` and `done` of an existing item.
    ///
    /// Fails with `RepositoryError::NotFound` when no item exists at `key`.
    async fn update_todo(&self, key: &TodoKey, update: &TodoUpdate) -> Result<()>;

    /// Removes the item at `key`, returning it if one existed.
    ///
    /// Deleting a missing key is not an error.
    async fn delete_todo(&self, key: &TodoKey) -> Result<Option<TodoItem>>;

    /// Sets only the attachment URL of an existing item and returns the item
    /// as stored after the write.
    ///
    /// Fails with `RepositoryError::NotFound` when no item exists at `key`.
    async fn update_attachment_url(&self, key: &TodoKey, attachment_url: &str) -> Result<TodoItem>;
}
