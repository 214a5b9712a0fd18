//! Application state.
//!
//! Shared by all request handlers. Holds the todo service, which in turn owns
//! the repository selected at compile time.

use std::sync::Arc;

use todos_core::storage::TodoRepository;

use crate::service::TodoService;

/// Shared application state.
///
/// Cloned for each request handler; the repository behind the service is
/// shared, stateless and safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
}

impl AppState {
    /// Creates an AppState around the given repository.
    pub fn with_repository(repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            todos: TodoService::new(repo),
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new() -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Fails when the table or index name is not configured.
        pub async fn new() -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_env().await?;
            tracing::info!(
                table = repo.table_name(),
                index = repo.index_name(),
                "Using DynamoDB storage"
            );
            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
