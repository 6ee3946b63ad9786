//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Task {0} not found")]
    TaskNotFound(i64),

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Trello gateway error: {0}")]
    TrelloGateway(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Invalid request: {0}")]
    Validation(String),
}
