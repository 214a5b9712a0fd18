//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and todo
//! items. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::storage::RepositoryError;
use todos_core::todo::{TodoItem, TodoUpdate};

use super::keys;

/// Convert a TodoItem to a DynamoDB item.
///
/// A missing attachment URL is left out rather than stored as null.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        keys::TODO_ID.to_string(),
        AttributeValue::S(todo.todo_id.clone()),
    );
    item.insert(
        keys::USER_ID.to_string(),
        AttributeValue::S(todo.user_id.clone()),
    );

    // Data
    item.insert(keys::NAME.to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(
        keys::CREATED_AT.to_string(),
        AttributeValue::S(todo.created_at.clone()),
    );
    item.insert(
        keys::DUE_DATE.to_string(),
        AttributeValue::S(todo.due_date.clone()),
    );
    item.insert(keys::DONE.to_string(), AttributeValue::Bool(todo.done));
    if let Some(url) = &todo.attachment_url {
        item.insert(
            keys::ATTACHMENT_URL.to_string(),
            AttributeValue::S(url.clone()),
        );
    }

    item
}

/// Convert a DynamoDB item to a TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        user_id: get_string(item, keys::USER_ID)?,
        todo_id: get_string(item, keys::TODO_ID)?,
        name: get_string(item, keys::NAME)?,
        created_at: get_string(item, keys::CREATED_AT)?,
        due_date: get_string(item, keys::DUE_DATE)?,
        done: get_bool(item, keys::DONE)?,
        attachment_url: get_optional_string(item, keys::ATTACHMENT_URL),
    })
}

/// Expression attribute values for the mutable-field update.
pub fn update_values(update: &TodoUpdate) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (":name".to_string(), AttributeValue::S(update.name.clone())),
        (
            ":dueDate".to_string(),
            AttributeValue::S(update.due_date.clone()),
        ),
        (":done".to_string(), AttributeValue::Bool(update.done)),
    ])
}

// ============================================================================
// Attribute helpers
// ============================================================================

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing attribute: {key}")))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_s().ok()).cloned()
}

fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing attribute: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem {
            user_id: "u1".to_string(),
            todo_id: "t1".to_string(),
            name: "Buy milk".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            due_date: "2024-01-05".to_string(),
            done: false,
            attachment_url: None,
        }
    }

    #[test]
    fn test_todo_round_trip() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);
        let parsed = item_to_todo(&item).unwrap();

        assert_eq!(todo, parsed);
    }

    #[test]
    fn test_todo_item_has_key_attributes() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(item.get("todoId").unwrap().as_s().unwrap(), "t1");
        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "u1");
        assert_eq!(item.get("done").unwrap().as_bool().unwrap(), &false);
    }

    #[test]
    fn test_missing_attachment_is_not_written() {
        let item = todo_to_item(&sample_todo());
        assert!(!item.contains_key("attachmentUrl"));

        let mut todo = sample_todo();
        todo.attachment_url = Some("https://x/y".to_string());
        let item = todo_to_item(&todo);
        assert_eq!(
            item.get("attachmentUrl").unwrap().as_s().unwrap(),
            "https://x/y"
        );
    }

    #[test]
    fn test_item_missing_attribute_is_serialization_error() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("dueDate");

        assert_eq!(
            item_to_todo(&item),
            Err(RepositoryError::Serialization(
                "Missing attribute: dueDate".to_string()
            ))
        );
    }

    #[test]
    fn test_done_with_wrong_type_is_rejected() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("done".to_string(), AttributeValue::S("false".to_string()));

        assert!(item_to_todo(&item).is_err());
    }

    #[test]
    fn test_update_values_cover_expression_placeholders() {
        let values = update_values(&TodoUpdate {
            name: "Buy oat milk".to_string(),
            due_date: "2024-01-06".to_string(),
            done: true,
        });

        assert_eq!(values.len(), 3);
        assert_eq!(values.get(":name").unwrap().as_s().unwrap(), "Buy oat milk");
        assert_eq!(
            values.get(":dueDate").unwrap().as_s().unwrap(),
            "2024-01-06"
        );
        assert_eq!(values.get(":done").unwrap().as_bool().unwrap(), &true);
    }
}
