use crate::domain::entities::app_config::AppConfig;
use crate::domain::repositories::{ConfigError, ConfigRepository};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct ConfigService {
    config_repo: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(config_repo: Arc<dyn ConfigRepository>) -> Self {
        Self { config_repo }
    }

    /// Record `db_path` in the config file and make sure the database exists.
    /// An existing database is left as it is.
    pub fn init(&self, db_path: impl Into<PathBuf>) -> Result<AppConfig, ConfigError> {
        let config = AppConfig::new(db_path);
        self.config_repo.save(&config)?;
        create_database(&config.db_path)?;
        info!(db_path = %config.db_path.display(), "to-do database initialized");
        Ok(config)
    }

    /// An explicit override wins over the config file.
    pub fn resolve(&self, db_override: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
        if let Some(db_path) = db_override {
            debug!(db_path = %db_path.display(), "using database override");
            return Ok(AppConfig::new(db_path));
        }
        self.config_repo.load()
    }
}

fn create_database(db_path: &Path) -> Result<(), ConfigError> {
    let db_error = |source| ConfigError::Database {
        path: db_path.to_path_buf(),
        source,
    };

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(db_error)?;
        }
    }

    match OpenOptions::new().write(true).create_new(true).open(db_path) {
        Ok(mut file) => file.write_all(b"[]\n").map_err(db_error),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(db_path = %db_path.display(), "keeping existing database");
            Ok(())
        }
        Err(e) => Err(db_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::JsonConfigRepository;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> ConfigService {
        ConfigService::new(Arc::new(JsonConfigRepository::new(dir.path().join("config.json"))))
    }

    #[test]
    fn init_writes_config_and_empty_database() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let db_path = dir.path().join("data").join("todo.json");

        let config = service.init(&db_path).unwrap();

        assert_eq!(config.db_path, db_path);
        assert_eq!(fs::read_to_string(&db_path).unwrap(), "[]\n");
        assert_eq!(service.resolve(None).unwrap(), config);
    }

    #[test]
    fn init_keeps_existing_database() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let db_path = dir.path().join("todo.json");
        let existing = r#"[{"id": 1, "task": "keep", "done": false}]"#;
        fs::write(&db_path, existing).unwrap();

        service.init(&db_path).unwrap();

        assert_eq!(fs::read_to_string(&db_path).unwrap(), existing);
    }

    #[test]
    fn resolve_without_config_asks_for_init() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        assert!(matches!(service.resolve(None), Err(ConfigError::NotInitialized(_))));
    }

    #[test]
    fn override_skips_config_file() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let db_path = dir.path().join("other.json");

        let config = service.resolve(Some(db_path.clone())).unwrap();
        assert_eq!(config.db_path, db_path);
    }
}
