//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `todos_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoKey, TodoUpdate};

use super::conversions::{item_to_todo, todo_to_item, update_values};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_update_item_error,
};
use super::keys;
use crate::config::TableConfig;

/// DynamoDB-based todo repository.
///
/// Stateless apart from the shared client and the table configuration fixed
/// at construction.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table configuration.
    pub fn new(client: Client, config: TableConfig) -> Self {
        Self {
            client,
            table_name: config.table_name,
            index_name: config.index_name,
        }
    }

    /// Creates a new repository from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and reads the table and index
    /// names through [`TableConfig::from_env`].
    pub async fn from_env() -> anyhow::Result<Self> {
        let table_config = TableConfig::from_env()?;
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        Ok(Self::new(client, table_config))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the by-user index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.index_name)
            .key_condition_expression(keys::LIST_BY_USER_CONDITION)
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        tracing::info!(user_id, count = items.len(), "Listed todo items");

        items.iter().map(item_to_todo).collect()
    }

    async fn get_todo(&self, key: &TodoKey) -> Result<Option<TodoItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        tracing::info!(todo_id = %key.todo_id, found = result.item.is_some(), "Get todo item");

        result.item.as_ref().map(item_to_todo).transpose()
    }

    async fn create_todo(&self, item: &TodoItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::info!(todo_id = %item.todo_id, "Created todo item");
        Ok(())
    }

    async fn update_todo(&self, key: &TodoKey, update: &TodoUpdate) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .update_expression(keys::UPDATE_TODO_EXPRESSION)
            .condition_expression(keys::ITEM_EXISTS_CONDITION)
            .expression_attribute_names(keys::NAME_ALIAS, keys::NAME)
            .set_expression_attribute_values(Some(update_values(update)))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, key.to_string()))?;

        tracing::info!(todo_id = %key.todo_id, "Updated todo item");
        Ok(())
    }

    async fn delete_todo(&self, key: &TodoKey) -> Result<Option<TodoItem>> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        tracing::info!(
            todo_id = %key.todo_id,
            existed = result.attributes.is_some(),
            "Deleted todo item"
        );

        result.attributes.as_ref().map(item_to_todo).transpose()
    }

    async fn update_attachment_url(&self, key: &TodoKey, attachment_url: &str) -> Result<TodoItem> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .update_expression(keys::UPDATE_ATTACHMENT_EXPRESSION)
            .condition_expression(keys::ITEM_EXISTS_CONDITION)
            .expression_attribute_values(
                ":attachmentUrl",
                AttributeValue::S(attachment_url.to_string()),
            )
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, key.to_string()))?;

        tracing::info!(todo_id = %key.todo_id, "Updated attachment URL for todo item");

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::Serialization("UpdateItem returned no attributes".to_string())
        })?;
        item_to_todo(&attributes)
    }
}
