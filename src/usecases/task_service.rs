//! Task use cases. Thin orchestration over the repository port.

use crate::domain::{DomainError, Task};
use crate::ports::TaskRepoPort;
use std::sync::Arc;

/// Service the controllers and scheduler call for task persistence.
pub struct TaskService {
    repo: Arc<dyn TaskRepoPort>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepoPort>) -> Self {
        Self { repo }
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, DomainError> {
        self.repo.get_all_tasks().await
    }

    /// Returns `TaskNotFound` for an absent id, never a placeholder.
    pub async fn get_task(&self, id: i64) -> Result<Task, DomainError> {
        self.repo.get_task(id).await
    }

    /// Upsert. Returns the saved task with its assigned id.
    pub async fn save_task(&self, task: Task) -> Result<Task, DomainError> {
        self.repo.save_task(&task).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete_task(id).await
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        self.repo.count().await
    }
}
