//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CreatedTrelloCard, DomainError, Mail, Task, TrelloBoard, TrelloCard};

/// Repository port. Persist and query tasks.
#[async_trait::async_trait]
pub trait TaskRepoPort: Send + Sync {
    /// Fetch all tasks, ordered by id.
    async fn get_all_tasks(&self) -> Result<Vec<Task>, DomainError>;

    /// Fetch one task. Returns `TaskNotFound` when the id is absent.
    async fn get_task(&self, id: i64) -> Result<Task, DomainError>;

    /// Upsert a task: insert when `id` is `None`, update when present.
    /// Returns the saved task with its assigned id.
    async fn save_task(&self, task: &Task) -> Result<Task, DomainError>;

    /// Delete a task. Returns `TaskNotFound` when the id is absent.
    async fn delete_task(&self, id: i64) -> Result<(), DomainError>;

    /// Number of stored tasks.
    async fn count(&self) -> Result<i64, DomainError>;
}

/// Trello API gateway. Fetch boards, create cards.
///
/// Single call per operation, no retries; failures surface as
/// `DomainError::TrelloGateway`.
#[async_trait::async_trait]
pub trait TrelloGateway: Send + Sync {
    /// Fetch all boards (with their lists) visible to the configured member.
    async fn fetch_boards(&self) -> Result<Vec<TrelloBoard>, DomainError>;

    /// Create one card and return the API's view of it.
    async fn create_card(&self, card: &TrelloCard) -> Result<CreatedTrelloCard, DomainError>;
}

/// Mail port. Dispatch one email.
#[async_trait::async_trait]
pub trait MailPort: Send + Sync {
    async fn send(&self, mail: &Mail) -> Result<(), DomainError>;
}
