//! The `/todos` resource
//!
//! RESTful surface consumed by the remote persistence adapter.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use todo_core::persist::WireTodo;
use todo_core::task::Task;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub status: bool,
    /// Provided by clients that generate their own ids; assigned here when
    /// absent
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub status: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(e: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn not_found(id: Uuid) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Todo {} not found", id),
        }),
    )
}

fn empty_title() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Title cannot be empty".to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /todos - List all todos
async fn list_todos(State(state): State<AppState>) -> Json<Vec<WireTodo>> {
    let todos = state.todos().list().await;
    Json(todos.iter().map(WireTodo::from).collect())
}

/// POST /todos - Create a new todo
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<WireTodo>), ApiError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(empty_title());
    }

    let mut task = Task::new(title).with_completed(req.status);
    if let Some(id) = req.id {
        task.id = id;
    }
    if let Some(created_at) = req.created_at {
        task.created_at = created_at;
    }
    if let Some(last_update) = req.last_update {
        task.updated_at = last_update;
    }

    let created = state.todos().create(task).await.map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(WireTodo::from(&created))))
}

/// PUT /todos/{id} - Replace title and status
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<WireTodo>, ApiError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(empty_title());
    }

    match state.todos().update(id, title.to_string(), req.status).await {
        Ok(updated) => Ok(Json(WireTodo::from(&updated))),
        Err(todo_core::Error::TaskNotFound(id)) => Err(not_found(id)),
        Err(e) => Err(internal_error(e)),
    }
}

/// DELETE /todos/{id} - Delete a todo
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.todos().delete(id).await.map_err(internal_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}
