//! Task endpoints: /v1/tasks.

use crate::adapters::http::dto::TaskDto;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::mapper;
use crate::adapters::http::server::AppState;
use crate::domain::DomainError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

/// GET /v1/tasks
pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskDto>>, ApiError> {
    let tasks = state.tasks.get_all_tasks().await?;
    Ok(Json(mapper::tasks_to_dto(tasks)))
}

/// GET /v1/tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskDto>, ApiError> {
    let task = state.tasks.get_task(task_id).await?;
    Ok(Json(mapper::task_to_dto(task)))
}

/// POST /v1/tasks
///
/// The body may omit `id`; the store assigns one. Responds with the saved task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(dto): Json<TaskDto>,
) -> Result<Json<TaskDto>, ApiError> {
    let saved = state.tasks.save_task(mapper::task_from_dto(dto)).await?;
    info!(task_id = ?saved.id, "task created");
    Ok(Json(mapper::task_to_dto(saved)))
}

/// PUT /v1/tasks
///
/// The body must carry the id of the task to update.
pub async fn update_task(
    State(state): State<AppState>,
    Json(dto): Json<TaskDto>,
) -> Result<Json<TaskDto>, ApiError> {
    if dto.id.is_none() {
        return Err(DomainError::Validation("task id is required for update".to_string()).into());
    }
    let saved = state.tasks.save_task(mapper::task_from_dto(dto)).await?;
    Ok(Json(mapper::task_to_dto(saved)))
}

/// DELETE /v1/tasks/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete_task(task_id).await?;
    info!(task_id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
