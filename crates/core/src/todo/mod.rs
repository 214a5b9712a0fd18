mod error;
mod operations;
mod requests;
mod types;

pub use error::TodoError;
pub use operations::{
    validate_attachment, validate_create, validate_due_date, validate_name, validate_update,
};
pub use requests::{AttachmentRequest, CreateTodoRequest, UpdateTodoRequest};
pub use types::{TodoItem, TodoKey, TodoUpdate};
