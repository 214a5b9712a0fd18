//! Todo CRUD handlers.
//!
//! Every route acts on behalf of the `CurrentUser`; the user id from the
//! request identity is the only owner a handler can address.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use todos_core::todo::{AttachmentRequest, CreateTodoRequest, TodoItem, UpdateTodoRequest};

use crate::{context::CurrentUser, handlers::AppError, state::AppState};

/// Response body for list requests.
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<TodoItem>,
}

/// Response body for single-item requests.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item: TodoItem,
}

/// Unwraps a JSON body, keeping the rejection so it is answered with a 400.
fn parse_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(value)| value).map_err(AppError::from)
}

// ============================================================================
// List Todos
// ============================================================================

/// List the caller's todos (GET /api/todos).
pub async fn list_todos(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse>, AppError> {
    tracing::debug!(request_id = %user.request_id, user_id = %user.user_id, "List todos");

    let items = state.todos.list_todos(&user.user_id).await?;
    Ok(Json(ItemsResponse { items }))
}

// ============================================================================
// Create Todo
// ============================================================================

/// Create a todo (POST /api/todos).
pub async fn create_todo(
    user: CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let request = parse_payload(payload)?;
    tracing::debug!(request_id = %user.request_id, payload = ?request, "Create todo");

    let item = state.todos.create_todo(&user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse { item })))
}

// ============================================================================
// Get Todo
// ============================================================================

/// Get one of the caller's todos (GET /api/todos/{todo_id}).
pub async fn get_todo(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.todos.get_todo(&user.user_id, &todo_id).await?;
    Ok(Json(ItemResponse { item }))
}

// ============================================================================
// Update Todo
// ============================================================================

/// Replace the mutable fields of a todo (PATCH /api/todos/{todo_id}).
pub async fn update_todo(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let request = parse_payload(payload)?;
    tracing::debug!(request_id = %user.request_id, todo_id = %todo_id, "Update todo");

    state
        .todos
        .update_todo(&user.user_id, &todo_id, request)
        .await?;
    Ok(StatusCode::OK)
}

// ============================================================================
// Delete Todo
// ============================================================================

/// Delete a todo (DELETE /api/todos/{todo_id}). Deleting twice is not an error.
pub async fn delete_todo(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.todos.delete_todo(&user.user_id, &todo_id).await?;
    Ok(StatusCode::OK)
}

// ============================================================================
// Attachment
// ============================================================================

/// Record an attachment URL on a todo (PUT /api/todos/{todo_id}/attachment).
pub async fn set_attachment(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    payload: Result<Json<AttachmentRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let request = parse_payload(payload)?;

    let item = state
        .todos
        .set_attachment_url(&user.user_id, &todo_id, request)
        .await?;
    Ok(Json(ItemResponse { item }))
}
