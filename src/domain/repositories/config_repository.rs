use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::app_config::AppConfig;
use crate::domain::repositories::task_repository::StorageFault;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found, run `rptodo init` first", .0.display())]
    NotInitialized(PathBuf),
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },
    #[error("failed to write config file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },
    #[error("failed to create database {}", .path.display())]
    Database {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<AppConfig, ConfigError>;
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}
