use crate::application::services::task_service::TaskService;
use crate::domain::entities::task::Task;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::repositories::json_storage;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// `[✔] 1: text` lines
    #[default]
    Txt,
    Json,
    /// `id,task,done` with a header row
    Csv,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("failed to encode tasks as JSON")]
    Render(#[from] serde_json::Error),
    #[error("failed to write export file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

const CSV_HEADER: &str = "id,task,done";

/// Converts the collection (or one task) into a text format and writes it out.
#[derive(Clone)]
pub struct ExportService {
    task_service: TaskService,
}

impl ExportService {
    pub fn new(task_service: TaskService) -> Self {
        Self { task_service }
    }

    /// Returns the number of exported tasks.
    pub fn export_all(&self, output: &Path, format: ExportFormat) -> Result<usize, ExportError> {
        let tasks = self.task_service.list_tasks()?;
        let rendered = render_all(&tasks, format)?;
        write_output(output, &rendered)?;
        debug!(count = tasks.len(), ?format, path = %output.display(), "tasks exported");
        Ok(tasks.len())
    }

    pub fn export_task(
        &self,
        task_id: u64,
        output: &Path,
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        let task = self.task_service.get_task(task_id)?;
        let rendered = render_one(&task, format)?;
        write_output(output, &rendered)?;
        debug!(task_id, ?format, path = %output.display(), "task exported");
        Ok(())
    }
}

fn write_output(output: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(output, contents).map_err(|source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    })
}

pub fn render_all(tasks: &[Task], format: ExportFormat) -> Result<String, ExportError> {
    let mut out = String::new();
    match format {
        ExportFormat::Txt => {
            for task in tasks {
                push_txt_line(&mut out, task);
            }
        }
        ExportFormat::Json => out = json_string(tasks)?,
        ExportFormat::Csv => {
            out.push_str(CSV_HEADER);
            out.push('\n');
            for task in tasks {
                push_csv_row(&mut out, task);
            }
        }
    }
    Ok(out)
}

/// Single-task export. JSON yields the bare object, not a one-element array.
pub fn render_one(task: &Task, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(json_string(task)?),
        _ => render_all(std::slice::from_ref(task), format),
    }
}

fn json_string<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let bytes = json_storage::to_json_pretty(value)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn push_txt_line(out: &mut String, task: &Task) {
    let status = if task.done { '✔' } else { '✗' };
    out.push_str(&format!("[{status}] {}: {}\n", task.id, task.task));
}

fn push_csv_row(out: &mut String, task: &Task) {
    out.push_str(&format!("{},{},{}\n", task.id, csv_field(&task.task), task.done));
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::JsonTaskRepository;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: 1,
                task: "buy milk".to_string(),
                done: true,
            },
            Task::new(2, "call \"Bob\", later"),
        ]
    }

    #[test]
    fn txt_marks_done_and_pending() {
        let out = render_all(&sample(), ExportFormat::Txt).unwrap();
        assert_eq!(out, "[✔] 1: buy milk\n[✗] 2: call \"Bob\", later\n");
    }

    #[test]
    fn csv_quotes_fields_that_need_it() {
        let out = render_all(&sample(), ExportFormat::Csv).unwrap();
        assert_eq!(
            out,
            "id,task,done\n1,buy milk,true\n2,\"call \"\"Bob\"\", later\",false\n"
        );
    }

    #[test]
    fn csv_of_empty_collection_is_header_only() {
        assert_eq!(render_all(&[], ExportFormat::Csv).unwrap(), "id,task,done\n");
    }

    #[test]
    fn json_all_is_an_array_and_json_one_is_an_object() {
        let tasks = sample();
        let all: serde_json::Value =
            serde_json::from_str(&render_all(&tasks, ExportFormat::Json).unwrap()).unwrap();
        assert_eq!(all.as_array().map(Vec::len), Some(2));

        let one: serde_json::Value =
            serde_json::from_str(&render_one(&tasks[0], ExportFormat::Json).unwrap()).unwrap();
        assert_eq!(one["id"], 1);
        assert_eq!(one["done"], true);
    }

    #[test]
    fn export_task_writes_file_and_reports_missing_id() {
        let dir = TempDir::new().unwrap();
        let repo = JsonTaskRepository::new(dir.path().join("todo.json"));
        let service = ExportService::new(TaskService::new(Arc::new(repo)));
        let task_service = service.task_service.clone();
        task_service.add_task("water plants").unwrap();

        let out = dir.path().join("task.txt");
        service.export_task(1, &out, ExportFormat::Txt).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "[✗] 1: water plants\n");

        let err = service.export_task(9, &out, ExportFormat::Txt).unwrap_err();
        assert!(matches!(err, ExportError::Repository(RepositoryError::NotFound(9))));
    }

    #[test]
    fn export_all_to_bad_path_is_write_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonTaskRepository::new(dir.path().join("todo.json"));
        let service = ExportService::new(TaskService::new(Arc::new(repo)));

        let out = dir.path().join("missing").join("out.csv");
        let err = service.export_all(&out, ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
