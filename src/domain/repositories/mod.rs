pub mod config_repository;
pub mod task_repository;

pub use config_repository::{ConfigError, ConfigRepository};
pub use task_repository::{RepositoryError, StorageFault, TaskRepository};
