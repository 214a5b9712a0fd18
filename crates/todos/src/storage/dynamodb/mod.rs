//! DynamoDB storage backend implementation.
//!
//! Items live in a single table keyed by (`todoId`, `userId`), with a
//! secondary index on `userId` for listing a user's items.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
