//! SQLite-backed task repository via libsql.
//!
//! Single `tasks` table with an autoincrement primary key. Saves use
//! INSERT .. ON CONFLICT DO UPDATE so the same call covers create and update.
//! One database file: <data_dir>/tasks.db

use crate::domain::{DomainError, Task};
use crate::ports::TaskRepoPort;
use libsql::{Database, params};
use std::path::{Path, PathBuf};
use tracing::info;

const TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL DEFAULT '',
    content TEXT NOT NULL DEFAULT ''
)"#;

/// SQLite repository. One database file (tasks.db) in the given base directory.
pub struct SqliteTaskRepo {
    db: Database,
    db_path: PathBuf,
}

impl SqliteTaskRepo {
    /// Connect to (or create) the SQLite database and ensure the schema exists.
    /// Call this once at startup; the returned repo is safe to share via Arc.
    ///
    /// Sets WAL mode and synchronous=NORMAL for concurrent read/write without
    /// sacrificing durability.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| DomainError::Repo(e.to_string()))?;
        let db_path = base.join("tasks.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Repo(e.to_string()))?;

        // WAL mode enables concurrent readers + one writer. PRAGMA returns a
        // row (the new value); use query and consume rows (execute fails when
        // rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Repo(format!("WAL pragma failed: {}", e)))?;
        while wal_rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
            .is_some()
        {}
        let mut sync_rows = conn
            .query("PRAGMA synchronous=NORMAL", ())
            .await
            .map_err(|e| DomainError::Repo(format!("synchronous pragma failed: {}", e)))?;
        while sync_rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
            .is_some()
        {}

        conn.execute(TASKS_TABLE, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;

        info!(path = %db_path.display(), "SQLite connected with WAL mode");

        Ok(Self {
            db,
            db_path: db_path.to_path_buf(),
        })
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect_conn(&self) -> Result<libsql::Connection, DomainError> {
        self.db.connect().map_err(|e| DomainError::Repo(e.to_string()))
    }
}

#[async_trait::async_trait]
impl TaskRepoPort for SqliteTaskRepo {
    async fn get_all_tasks(&self) -> Result<Vec<Task>, DomainError> {
        let conn = self.connect_conn()?;
        let mut rows = conn
            .query("SELECT id, title, content FROM tasks ORDER BY id", ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut tasks = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            let id: i64 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
            let title: String = row.get::<String>(1).unwrap_or_default();
            let content: String = row.get::<String>(2).unwrap_or_default();
            tasks.push(Task {
                id: Some(id),
                title,
                content,
            });
        }
        Ok(tasks)
    }

    async fn get_task(&self, id: i64) -> Result<Task, DomainError> {
        let conn = self.connect_conn()?;
        let mut rows = conn
            .query(
                "SELECT id, title, content FROM tasks WHERE id = ?1",
                params![id],
            )
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        match rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            Some(row) => Ok(Task {
                id: Some(row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?),
                title: row.get::<String>(1).unwrap_or_default(),
                content: row.get::<String>(2).unwrap_or_default(),
            }),
            None => Err(DomainError::TaskNotFound(id)),
        }
    }

    async fn save_task(&self, task: &Task) -> Result<Task, DomainError> {
        let conn = self.connect_conn()?;
        let id = match task.id {
            Some(id) => {
                conn.execute(
                    r#"
                    INSERT INTO tasks (id, title, content)
                    VALUES (?1, ?2, ?3)
                    ON CONFLICT (id) DO UPDATE SET
                        title = excluded.title,
                        content = excluded.content
                    "#,
                    params![id, task.title.as_str(), task.content.as_str()],
                )
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
                id
            }
            None => {
                conn.execute(
                    "INSERT INTO tasks (title, content) VALUES (?1, ?2)",
                    params![task.title.as_str(), task.content.as_str()],
                )
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
                conn.last_insert_rowid()
            }
        };
        Ok(Task {
            id: Some(id),
            title: task.title.clone(),
            content: task.content.clone(),
        })
    }

    async fn delete_task(&self, id: i64) -> Result<(), DomainError> {
        let conn = self.connect_conn()?;
        let affected = conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        if affected == 0 {
            return Err(DomainError::TaskNotFound(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let conn = self.connect_conn()?;
        let mut rows = conn
            .query("SELECT COUNT(*) FROM tasks", ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        match rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            Some(row) => row.get(0).map_err(|e| DomainError::Repo(e.to_string())),
            None => Ok(0),
        }
    }
}
