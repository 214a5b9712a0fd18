//! In-memory storage backend.
//!
//! Stores items in a `HashMap` keyed by [`TodoKey`](todos_core::todo::TodoKey)
//! wrapped in `Arc<RwLock<_>>`. Useful for tests and local development where
//! persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use todos::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
