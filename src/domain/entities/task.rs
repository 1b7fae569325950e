use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub task: String,
    // files written before the flag existed have no `done` key
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(id: u64, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            done: false,
        }
    }

    /// Checkbox marker used by `list`.
    pub fn status_marker(&self) -> &'static str {
        if self.done { "[✔]" } else { "[ ]" }
    }
}

/// Next free id: one past the highest id in the collection, or 1 when empty.
/// Ids of removed tasks are only reused if they were the highest.
/// `None` once the highest id is `u64::MAX`.
pub fn next_id(tasks: &[Task]) -> Option<u64> {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Index of the first task carrying `id`. Later duplicates are ignored.
pub fn position_of(tasks: &[Task], id: u64) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}
