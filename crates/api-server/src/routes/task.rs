//! Task API endpoints
//!
//! RESTful API for task CRUD operations. Every successful mutation appends
//! one notification record; the notification outcome never affects the HTTP
//! response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tm_core::task::{Task, TaskRepository};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListTasksResponse {
    tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
struct DeleteTaskResponse {
    message: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Json<ListTasksResponse> {
    let tasks = state.task_store().list().await;
    Json(ListTasksResponse { tasks })
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = match req.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => {
            warn!("Task creation failed - missing title");
            return Err(ApiError::Validation("Title"));
        }
    };

    let task = state
        .task_store()
        .create(title, req.description.unwrap_or_default())
        .await;

    state
        .notification_log()
        .send(format!("New task created: {}", task.title), "admin")
        .await;

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    match state.task_store().get(id).await {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::TaskNotFound),
    }
}

/// PUT /api/tasks/{id} - Update the status of a task
async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateTaskStatusRequest>,
) -> Result<Json<Task>, ApiError> {
    // Field validation runs before the store is consulted, so a missing
    // status wins over an unknown id.
    let status = req.status.ok_or(ApiError::Validation("Status"))?;

    let task = state
        .task_store()
        .update_status(id, status)
        .await
        .ok_or(ApiError::TaskNotFound)?;

    state
        .notification_log()
        .send(
            format!("Task {} updated to {}", task.id, task.status),
            "admin",
        )
        .await;

    Ok(Json(task))
}

/// DELETE /api/tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    if !state.task_store().delete(id).await {
        return Err(ApiError::TaskNotFound);
    }

    state
        .notification_log()
        .send(format!("Task {} deleted", id), "admin")
        .await;

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted",
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task_status).delete(delete_task),
        )
}
