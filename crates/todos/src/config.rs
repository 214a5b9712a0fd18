use std::env;

use thiserror::Error;

/// Environment variable holding the todos table name.
pub const TABLE_NAME_VAR: &str = "TODOS_TABLE";
/// Environment variable holding the name of the by-user secondary index.
pub const INDEX_NAME_VAR: &str = "TODOS_BY_USER_INDEX";

/// Errors raised while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),
}

/// Table configuration for the DynamoDB backend.
///
/// Validated when built, so a bad deployment fails at startup instead of on
/// the first store call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
pub struct TableConfig {
    /// Table holding todo items, keyed by (`todoId`, `userId`).
    pub table_name: String,
    /// Secondary index keyed by `userId`, used for listing.
    pub index_name: String,
}

#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
impl TableConfig {
    /// Builds a table configuration, rejecting blank names.
    pub fn new(
        table_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let table_name = table_name.into();
        let index_name = index_name.into();

        if table_name.trim().is_empty() {
            return Err(ConfigError::Missing(TABLE_NAME_VAR));
        }
        if index_name.trim().is_empty() {
            return Err(ConfigError::Missing(INDEX_NAME_VAR));
        }

        Ok(Self {
            table_name,
            index_name,
        })
    }

    /// Load the table configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - Table name (required)
    /// - `TODOS_BY_USER_INDEX` - Secondary index name (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_NAME_VAR).ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;
        let index_name = lookup(INDEX_NAME_VAR).ok_or(ConfigError::Missing(INDEX_NAME_VAR))?;
        Self::new(table_name, index_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_both_names() {
        let config = TableConfig::from_lookup(lookup_from(&[
            ("TODOS_TABLE", "Todos-dev"),
            ("TODOS_BY_USER_INDEX", "UserIdIndex"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "Todos-dev");
        assert_eq!(config.index_name, "UserIdIndex");
    }

    #[test]
    fn test_missing_table_fails_fast() {
        let result =
            TableConfig::from_lookup(lookup_from(&[("TODOS_BY_USER_INDEX", "UserIdIndex")]));
        assert_eq!(result, Err(ConfigError::Missing("TODOS_TABLE")));
    }

    #[test]
    fn test_missing_index_fails_fast() {
        let result = TableConfig::from_lookup(lookup_from(&[("TODOS_TABLE", "Todos-dev")]));
        assert_eq!(result, Err(ConfigError::Missing("TODOS_BY_USER_INDEX")));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        assert_eq!(
            TableConfig::new("  ", "UserIdIndex"),
            Err(ConfigError::Missing("TODOS_TABLE"))
        );
        assert_eq!(
            TableConfig::new("Todos-dev", ""),
            Err(ConfigError::Missing("TODOS_BY_USER_INDEX"))
        );
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::Missing("TODOS_TABLE").to_string(),
            "Missing required configuration: TODOS_TABLE"
        );
    }
}
