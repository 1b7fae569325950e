use std::path::{Path, PathBuf};

use crate::domain::entities::task::{self, Task};
use crate::domain::repositories::task_repository::{RepositoryError, Result, TaskRepository};
use crate::infrastructure::repositories::json_storage;

// implementation of TaskRepository that stores tasks in a JSON file
#[derive(Debug, Clone)]
pub struct JsonTaskRepository {
    file_path: PathBuf,
}

impl JsonTaskRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_all(&self) -> Result<Vec<Task>> {
        json_storage::load_tasks(&self.file_path).map_err(|source| RepositoryError::Read {
            path: self.file_path.clone(),
            source,
        })
    }

    fn save_all(&self, tasks: &[Task]) -> Result<()> {
        json_storage::save_tasks(tasks, &self.file_path).map_err(|source| RepositoryError::Write {
            path: self.file_path.clone(),
            source,
        })
    }

    /// Load, apply `change` to the first task with `task_id`, save.
    fn update(&self, task_id: u64, change: impl FnOnce(&mut Task)) -> Result<()> {
        let mut tasks = self.load_all()?;
        let index = task::position_of(&tasks, task_id).ok_or(RepositoryError::NotFound(task_id))?;
        change(&mut tasks[index]);
        self.save_all(&tasks)
    }
}

impl TaskRepository for JsonTaskRepository {
    fn add_task(&self, text: &str) -> Result<u64> {
        let mut tasks = self.load_all()?;
        let id = task::next_id(&tasks).ok_or(RepositoryError::IdsExhausted)?;
        tasks.push(Task::new(id, text));
        self.save_all(&tasks)?;
        Ok(id)
    }

    fn remove_task(&self, task_id: u64) -> Result<()> {
        let mut tasks = self.load_all()?;
        let index = task::position_of(&tasks, task_id).ok_or(RepositoryError::NotFound(task_id))?;
        tasks.remove(index);
        self.save_all(&tasks)
    }

    fn set_done(&self, task_id: u64, done: bool) -> Result<()> {
        self.update(task_id, |task| task.done = done)
    }

    fn edit_task(&self, task_id: u64, text: &str) -> Result<()> {
        self.update(task_id, |task| task.task = text.to_string())
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        self.load_all()
    }
}
