pub mod entities;
pub mod repositories;

pub use entities::{AppConfig, Task};
pub use repositories::{ConfigError, ConfigRepository, RepositoryError, TaskRepository};
