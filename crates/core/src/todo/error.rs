use thiserror::Error;

/// Errors that can occur when validating todo payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo name cannot be empty")]
    EmptyName,
    #[error("Todo name too long (max 200 characters)")]
    NameTooLong,
    #[error("Invalid due date (expected YYYY-MM-DD): {0}")]
    InvalidDueDate(String),
    #[error("Attachment URL cannot be empty")]
    EmptyAttachmentUrl,
}
