use crate::application::services::ConfigService;
use crate::domain::entities::app_config::AppConfig;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// To-do database location
    #[arg(long = "db-path", value_name = "PATH", default_value_os_t = AppConfig::default_db_path())]
    pub db_path: PathBuf,
}

pub fn run_init(config_service: &ConfigService, args: InitArgs) -> anyhow::Result<()> {
    let config = config_service
        .init(args.db_path)
        .context("Initializing the to-do database failed")?;
    println!("The to-do database is {}", config.db_path.display());
    Ok(())
}
