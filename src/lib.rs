//! JSON-file backed to-do list: domain types, the task store, the services
//! used by the `rptodo` binary and its command handlers.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

pub use application::services::{ConfigService, ExportFormat, ExportService, TaskService};
pub use domain::{AppConfig, Task};
pub use domain::repositories::{ConfigError, RepositoryError, TaskRepository};
pub use infrastructure::repositories::{JsonConfigRepository, JsonTaskRepository};
