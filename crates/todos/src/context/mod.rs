//! Request-scoped context module.
//!
//! Provides the `CurrentUser` extractor carrying the caller's verified
//! identity, complementing application-scoped `AppState`.

mod extractor;
mod types;

pub use types::{CurrentUser, RequestId, USER_ID_HEADER};
