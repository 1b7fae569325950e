use crate::domain::entities::task::Task;
use crate::domain::repositories::task_repository::{Result, TaskRepository};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct TaskService {
    pub(crate) task_repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    // === TASK MUTATIONS ===

    pub fn add_task(&self, text: &str) -> Result<u64> {
        let id = self.task_repo.add_task(text)?;
        debug!(task_id = id, "task added");
        Ok(id)
    }

    pub fn remove_task(&self, task_id: u64) -> Result<()> {
        self.task_repo.remove_task(task_id)?;
        debug!(task_id, "task removed");
        Ok(())
    }

    pub fn mark_done(&self, task_id: u64) -> Result<()> {
        self.set_done(task_id, true)
    }

    pub fn mark_undone(&self, task_id: u64) -> Result<()> {
        self.set_done(task_id, false)
    }

    fn set_done(&self, task_id: u64, done: bool) -> Result<()> {
        self.task_repo.set_done(task_id, done)?;
        debug!(task_id, done, "task status updated");
        Ok(())
    }

    pub fn edit_task(&self, task_id: u64, text: &str) -> Result<()> {
        self.task_repo.edit_task(task_id, text)?;
        debug!(task_id, "task text updated");
        Ok(())
    }

    // === QUERIES ===

    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self.task_repo.list_tasks()?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                warn!(task_id = task.id, "duplicate task id in database, only the first is editable");
            }
        }

        Ok(tasks)
    }

    pub fn get_task(&self, task_id: u64) -> Result<Task> {
        self.task_repo.get_task(task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::RepositoryError;
    use crate::infrastructure::repositories::JsonTaskRepository;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> TaskService {
        TaskService::new(Arc::new(JsonTaskRepository::new(dir.path().join("todo.json"))))
    }

    #[test]
    fn done_and_undone_toggle_the_flag() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let id = service.add_task("laundry").unwrap();

        service.mark_done(id).unwrap();
        assert!(service.get_task(id).unwrap().done);

        service.mark_undone(id).unwrap();
        assert!(!service.get_task(id).unwrap().done);
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        assert!(matches!(service.remove_task(3), Err(RepositoryError::NotFound(3))));
        assert!(matches!(service.edit_task(3, "x"), Err(RepositoryError::NotFound(3))));
        assert!(matches!(service.mark_done(3), Err(RepositoryError::NotFound(3))));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        service.add_task("one").unwrap();
        service.add_task("two").unwrap();
        service.add_task("three").unwrap();
        service.edit_task(1, "uno").unwrap();

        let texts: Vec<_> = service
            .list_tasks()
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();
        assert_eq!(texts, ["uno", "two", "three"]);
    }
}
