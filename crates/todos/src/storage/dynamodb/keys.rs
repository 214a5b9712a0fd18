//! DynamoDB attribute names and key construction.
//!
//! Pure functions; the table's primary key is (`todoId`, `userId`) and the
//! by-user index is keyed on `userId` alone.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::todo::TodoKey;

// ============================================================================
// Attribute names
// ============================================================================

pub const TODO_ID: &str = "todoId";
pub const USER_ID: &str = "userId";
pub const NAME: &str = "name";
pub const CREATED_AT: &str = "createdAt";
pub const DUE_DATE: &str = "dueDate";
pub const DONE: &str = "done";
pub const ATTACHMENT_URL: &str = "attachmentUrl";

// ============================================================================
// Expressions
// ============================================================================

/// Key condition for listing a user's items on the by-user index.
pub const LIST_BY_USER_CONDITION: &str = "userId = :userId";

/// Update expression for the mutable field set.
///
/// `name` is a DynamoDB reserved word and goes through the `#name` alias.
pub const UPDATE_TODO_EXPRESSION: &str = "set #name = :name, dueDate = :dueDate, done = :done";

/// Alias used for the reserved `name` attribute.
pub const NAME_ALIAS: &str = "#name";

pub const UPDATE_ATTACHMENT_EXPRESSION: &str = "set attachmentUrl = :attachmentUrl";

/// Guard making updates fail instead of creating a partial item.
pub const ITEM_EXISTS_CONDITION: &str = "attribute_exists(todoId)";

/// Build the primary key map for an item.
pub fn primary_key(key: &TodoKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (TODO_ID.to_string(), AttributeValue::S(key.todo_id.clone())),
        (USER_ID.to_string(), AttributeValue::S(key.user_id.clone())),
    ])
}
