use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::app_config::AppConfig;
use crate::domain::repositories::config_repository::{ConfigError, ConfigRepository};
use crate::domain::repositories::StorageFault;
use crate::infrastructure::repositories::json_storage;

#[derive(Debug, Clone)]
pub struct JsonConfigRepository {
    file_path: PathBuf,
}

impl JsonConfigRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn write_error(&self, source: impl Into<StorageFault>) -> ConfigError {
        ConfigError::Write {
            path: self.file_path.clone(),
            source: source.into(),
        }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotInitialized(self.file_path.clone()));
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: self.file_path.clone(),
                    source: e.into(),
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| ConfigError::Read {
            path: self.file_path.clone(),
            source: e.into(),
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let json = json_storage::to_json_pretty(config).map_err(|e| self.write_error(e))?;

        // Create dir if it doesn't exist
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        json_storage::write_atomic(&self.file_path, &json).map_err(|e| self.write_error(e))
    }
}
