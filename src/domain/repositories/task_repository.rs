use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::task::Task;

/// Low-level cause behind a failed read or write of a JSON file.
#[derive(Debug, Error)]
pub enum StorageFault {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database exists but could not be opened or parsed.
    #[error("failed to read task database {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },
    /// The database could not be replaced.
    #[error("failed to write task database {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },
    #[error("task with ID {0} not found")]
    NotFound(u64),
    /// The highest id in use is `u64::MAX`, so no new id can be assigned.
    #[error("no task ID left after {}", u64::MAX)]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Durable CRUD over the task collection.
///
/// Every call is a complete load/mutate/save cycle: nothing is cached between
/// calls, a failed load never writes, and a mutation that matches no task
/// returns `NotFound` without touching storage. When ids are duplicated the
/// first task in collection order is the one acted on.
pub trait TaskRepository: Send + Sync + Debug {
    /// Append a new pending task and return its id.
    fn add_task(&self, text: &str) -> Result<u64>;

    fn remove_task(&self, task_id: u64) -> Result<()>;

    fn set_done(&self, task_id: u64, done: bool) -> Result<()>;

    /// Replace the text of a task, leaving `id` and `done` alone.
    fn edit_task(&self, task_id: u64, text: &str) -> Result<()>;

    fn list_tasks(&self) -> Result<Vec<Task>>;

    fn get_task(&self, task_id: u64) -> Result<Task> {
        self.list_tasks()?
            .into_iter()
            .find(|t| t.id == task_id)
            .ok_or(RepositoryError::NotFound(task_id))
    }
}
