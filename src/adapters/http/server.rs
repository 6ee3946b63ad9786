//! HTTP server. Router wiring for the task and Trello endpoints.

use crate::adapters::http::{tasks, trello};
use crate::usecases::{TaskService, TrelloFacade};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Task use cases over the repository port.
    pub tasks: Arc<TaskService>,
    /// Trello facade over the gateway port.
    pub trello: Arc<TrelloFacade>,
}

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/tasks",
            get(tasks::get_tasks)
                .post(tasks::create_task)
                .put(tasks::update_task),
        )
        .route(
            "/v1/tasks/{task_id}",
            get(tasks::get_task).delete(tasks::delete_task),
        )
        .route("/v1/trello/boards", get(trello::get_trello_boards))
        .route("/v1/trello/cards", post(trello::create_trello_card))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
