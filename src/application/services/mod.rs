pub mod config_service;
pub mod export_service;
pub mod task_service;

pub use config_service::ConfigService;
pub use export_service::{ExportError, ExportFormat, ExportService};
pub use task_service::TaskService;
