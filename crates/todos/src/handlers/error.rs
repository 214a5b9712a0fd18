use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todos_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::service::ServiceError;

/// Handler error type that wraps `anyhow::Error`.
///
/// Malformed bodies and validation failures are answered with 400 and
/// repository failures keep their own status codes. Anything else is a 500.
pub struct AppError(pub anyhow::Error);

fn status_for(error: &anyhow::Error) -> StatusCode {
    if error.is::<JsonRejection>() {
        return StatusCode::BAD_REQUEST;
    }

    let code = match error.downcast_ref::<ServiceError>() {
        Some(ServiceError::Validation(_)) => 400,
        Some(ServiceError::Repository(repo_error)) => repository_error_to_status_code(repo_error),
        None => match error.downcast_ref::<RepositoryError>() {
            Some(repo_error) => repository_error_to_status_code(repo_error),
            None => 500,
        },
    };
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = status_for(&self.0);

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
