use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const APP_NAME: &str = "rptodo";

/// Settings written by `rptodo init` and handed explicitly to every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub db_path: PathBuf,
}

impl AppConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// `~/.rptodo_todo.json`, or the working directory when there is no home.
    pub fn default_db_path() -> PathBuf {
        let file_name = format!(".{APP_NAME}_todo.json");
        match dirs::home_dir() {
            Some(home) => home.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Config file location, honouring `RPTODO_CONFIG`.
    pub fn default_config_path() -> PathBuf {
        if let Some(path) = std::env::var_os("RPTODO_CONFIG") {
            return PathBuf::from(path);
        }
        match dirs::config_dir() {
            Some(dir) => dir.join(APP_NAME).join("config.json"),
            None => PathBuf::from(format!("{APP_NAME}-config.json")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(Self::default_db_path())
    }
}
