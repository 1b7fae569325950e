pub mod json_config_repository;
pub mod json_storage;
pub mod json_task_repository;

pub use json_config_repository::JsonConfigRepository;
pub use json_task_repository::JsonTaskRepository;
