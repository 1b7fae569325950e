pub mod app_config;
pub mod task;

pub use app_config::AppConfig;
pub use task::Task;
