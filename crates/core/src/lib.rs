//! Functional core for the todos backend.
//!
//! Pure data types, validation and the storage contract. Nothing in this
//! crate performs I/O; the `todos` binary provides the implementations.

pub mod storage;
pub mod todo;
