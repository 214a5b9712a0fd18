use serde::{Deserialize, Serialize};

/// Composite key addressing a single todo item.
///
/// Items are partitioned by owner, so a todo id alone never identifies an
/// item; both components are always required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoKey {
    pub todo_id: String,
    pub user_id: String,
}

impl TodoKey {
    pub fn new(todo_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            todo_id: todo_id.into(),
            user_id: user_id.into(),
        }
    }
}

impl std::fmt::Display for TodoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.user_id, self.todo_id)
    }
}

/// A persisted todo item.
///
/// Timestamps and dates are kept as the ISO-8601 strings they are stored as,
/// so an item read back from the store compares equal to the one written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub user_id: String,
    pub todo_id: String,
    pub name: String,
    /// RFC 3339 creation timestamp, immutable after creation.
    pub created_at: String,
    /// `YYYY-MM-DD` due date.
    pub due_date: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Returns the composite key of this item.
    pub fn key(&self) -> TodoKey {
        TodoKey::new(self.todo_id.clone(), self.user_id.clone())
    }

    /// Applies a full mutable-field update, leaving identity, `created_at`
    /// and `attachment_url` untouched.
    pub fn apply_update(&mut self, update: &TodoUpdate) {
        self.name = update.name.clone();
        self.due_date = update.due_date.clone();
        self.done = update.done;
    }
}

/// The mutable fields of a todo item.
///
/// Updates always replace all three fields together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> TodoItem {
        TodoItem {
            user_id: "u1".to_string(),
            todo_id: "t1".to_string(),
            name: "Buy milk".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            due_date: "2024-01-05".to_string(),
            done: false,
            attachment_url: Some("https://x/y".to_string()),
        }
    }

    #[test]
    fn test_key_uses_both_components() {
        let item = sample_item();
        assert_eq!(item.key(), TodoKey::new("t1", "u1"));
        assert_eq!(item.key().to_string(), "u1/t1");
    }

    #[test]
    fn test_apply_update_keeps_immutable_fields() {
        let mut item = sample_item();
        item.apply_update(&TodoUpdate {
            name: "Buy oat milk".to_string(),
            due_date: "2024-01-06".to_string(),
            done: true,
        });

        assert_eq!(item.name, "Buy oat milk");
        assert_eq!(item.due_date, "2024-01-06");
        assert!(item.done);
        assert_eq!(item.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(item.attachment_url.as_deref(), Some("https://x/y"));
    }

    #[test]
    fn test_item_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_item()).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["todoId"], "t1");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["dueDate"], "2024-01-05");
        assert_eq!(json["attachmentUrl"], "https://x/y");
    }

    #[test]
    fn test_item_without_attachment_omits_field() {
        let mut item = sample_item();
        item.attachment_url = None;

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("attachmentUrl").is_none());

        let parsed: TodoItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, item);
    }
}
