//! In-memory task repository. Implements TaskRepoPort over a mutex-guarded map.
//!
//! Used by the integration tests and as a stand-in wherever a database file is
//! unwanted. Same semantics as the SQLite repo: upsert saves, not-found errors.

use crate::domain::{DomainError, Task};
use crate::ports::TaskRepoPort;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct Inner {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

/// Map-backed repository. BTreeMap keeps `get_all_tasks` ordered by id.
#[derive(Default)]
pub struct InMemoryTaskRepo {
    inner: Mutex<Inner>,
}

impl InMemoryTaskRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TaskRepoPort for InMemoryTaskRepo {
    async fn get_all_tasks(&self) -> Result<Vec<Task>, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner.tasks.values().cloned().collect())
    }

    async fn get_task(&self, id: i64) -> Result<Task, DomainError> {
        let inner = self.inner.lock().await;
        inner
            .tasks
            .get(&id)
            .cloned()
            .ok_or(DomainError::TaskNotFound(id))
    }

    async fn save_task(&self, task: &Task) -> Result<Task, DomainError> {
        let mut inner = self.inner.lock().await;
        let id = match task.id {
            Some(id) => {
                inner.next_id = inner.next_id.max(id);
                id
            }
            None => {
                inner.next_id += 1;
                inner.next_id
            }
        };
        let saved = Task {
            id: Some(id),
            title: task.title.clone(),
            content: task.content.clone(),
        };
        inner.tasks.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_task(&self, id: i64) -> Result<(), DomainError> {
        let mut inner = self.inner.lock().await;
        inner
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::TaskNotFound(id))
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner.tasks.len() as i64)
    }
}
