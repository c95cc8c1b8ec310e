use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use tasko_domain::{Todo, TodoId};

use crate::dto::{CreateTodoRequest, MessageResponse, UpdateTodoRequest};
use crate::errors::ApiError;
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Deleted successfully";

/// Reads/deletes treat a malformed id like any unknown id.
fn lookup_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found())
}

// =============================================================================
// List
// =============================================================================

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.repository.list().await?;
    Ok(Json(todos))
}

// =============================================================================
// Create
// =============================================================================

pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = body?;
    let new_todo = request.into_new_todo()?;

    let todo = state.repository.insert(new_todo).await?;
    tracing::info!(id = %todo.id, priority = %todo.priority.as_str(), "todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

// =============================================================================
// Get
// =============================================================================

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = lookup_id(&id)?;

    state
        .repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

// =============================================================================
// Update
// =============================================================================

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id: TodoId = id.parse()?;
    let Json(request) = body?;
    let patch = request.into_patch()?;

    let todo = state.repository.update(id, patch).await?;
    tracing::debug!(id = %todo.id, completed = todo.completed, "todo updated");

    Ok(Json(todo))
}

// =============================================================================
// Delete
// =============================================================================

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = lookup_id(&id)?;

    state.repository.delete(id).await?;
    tracing::info!(%id, "todo deleted");

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

// =============================================================================
// Tests
// =============================================================================
