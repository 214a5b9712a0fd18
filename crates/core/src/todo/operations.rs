use chrono::NaiveDate;

use super::error::TodoError;
use super::requests::{AttachmentRequest, CreateTodoRequest, UpdateTodoRequest};

const MAX_NAME_LEN: usize = 200;

/// Validates a todo name.
pub fn validate_name(name: &str) -> Result<(), TodoError> {
    if name.trim().is_empty() {
        return Err(TodoError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(TodoError::NameTooLong);
    }
    Ok(())
}

/// Validates a due date in `YYYY-MM-DD` form.
pub fn validate_due_date(due_date: &str) -> Result<(), TodoError> {
    NaiveDate::parse_from_str(due_date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| TodoError::InvalidDueDate(due_date.to_string()))
}

/// Validates a create request before it is turned into an item.
pub fn validate_create(request: &CreateTodoRequest) -> Result<(), TodoError> {
    validate_name(&request.name)?;
    validate_due_date(&request.due_date)
}

/// Validates an update request.
pub fn validate_update(request: &UpdateTodoRequest) -> Result<(), TodoError> {
    validate_name(&request.name)?;
    validate_due_date(&request.due_date)
}

/// Validates an attachment request.
pub fn validate_attachment(request: &AttachmentRequest) -> Result<(), TodoError> {
    if request.attachment_url.trim().is_empty() {
        return Err(TodoError::EmptyAttachmentUrl);
    }
    Ok(())
}
