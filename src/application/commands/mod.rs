pub mod add_task;
pub mod edit_task;
pub mod export;
pub mod init;
pub mod list_tasks;
pub mod remove_task;
pub mod set_done;

pub use add_task::{AddTaskArgs, run_add_task};
pub use edit_task::{EditTaskArgs, run_edit_task};
pub use export::{ExportAllArgs, ExportTaskArgs, run_export_all, run_export_task};
pub use init::{InitArgs, run_init};
pub use list_tasks::run_list_tasks;
pub use remove_task::{RemoveTaskArgs, run_remove_task};
pub use set_done::{SetDoneArgs, run_set_done};

use crate::application::services::{ConfigService, ExportError, ExportService, TaskService};
use crate::domain::entities::app_config::AppConfig;
use crate::domain::repositories::{ConfigError, RepositoryError};
use crate::infrastructure::repositories::{JsonConfigRepository, JsonTaskRepository};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

pub const EXIT_CONFIG_ERROR: u8 = 1;
pub const EXIT_READ_ERROR: u8 = 3;
pub const EXIT_WRITE_ERROR: u8 = 4;
pub const EXIT_EXPORT_ERROR: u8 = 5;
pub const EXIT_NOT_FOUND: u8 = 6;

#[derive(Debug, Parser)]
#[command(
    name = "rptodo",
    version,
    about = "A command-line to-do list manager",
    disable_version_flag = true
)]
pub struct Cli {
    /// Show the application's version and exit
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Use this database instead of the one recorded by `init`
    #[arg(long, global = true, env = "RPTODO_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize the to-do database
    Init(InitArgs),
    /// Add a new to-do task
    Add(AddTaskArgs),
    /// Remove a to-do task by its ID
    Remove(RemoveTaskArgs),
    /// Mark a task as done
    Done(SetDoneArgs),
    /// Mark a task as not done
    Undone(SetDoneArgs),
    /// Edit a task description
    Edit(EditTaskArgs),
    /// List all to-do tasks with status
    List,
    /// Export all to-do tasks to a TXT, JSON or CSV file
    ExportAll(ExportAllArgs),
    /// Export a single to-do task to a TXT, JSON or CSV file
    ExportTask(ExportTaskArgs),
}

/// Services wired to one database for the lifetime of a command.
pub struct CommandContext {
    pub task_service: TaskService,
    pub export_service: ExportService,
}

impl CommandContext {
    pub fn new(config: &AppConfig) -> Self {
        let task_service = TaskService::new(Arc::new(JsonTaskRepository::new(&config.db_path)));
        let export_service = ExportService::new(task_service.clone());
        Self {
            task_service,
            export_service,
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_service = ConfigService::new(Arc::new(JsonConfigRepository::new(
        AppConfig::default_config_path(),
    )));

    // every command except init needs a database
    let db_override = cli.db;
    let ctx = || -> anyhow::Result<CommandContext> {
        let config = config_service
            .resolve(db_override.clone())
            .context("Could not locate the to-do database")?;
        Ok(CommandContext::new(&config))
    };

    match cli.command {
        Command::Init(args) => run_init(&config_service, args),
        Command::Add(args) => run_add_task(&ctx()?, args),
        Command::Remove(args) => run_remove_task(&ctx()?, args),
        Command::Done(args) => run_set_done(&ctx()?, args, true),
        Command::Undone(args) => run_set_done(&ctx()?, args, false),
        Command::Edit(args) => run_edit_task(&ctx()?, args),
        Command::List => run_list_tasks(&ctx()?),
        Command::ExportAll(args) => run_export_all(&ctx()?, args),
        Command::ExportTask(args) => run_export_task(&ctx()?, args),
    }
}

/// Process exit code for a failed command, taken from the first typed error
/// found in the chain.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<RepositoryError>() {
            return repository_exit_code(e);
        }
        if let Some(e) = cause.downcast_ref::<ExportError>() {
            return match e {
                ExportError::Repository(inner) => repository_exit_code(inner),
                ExportError::Render(_) | ExportError::Write { .. } => EXIT_EXPORT_ERROR,
            };
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return EXIT_CONFIG_ERROR;
        }
    }
    EXIT_CONFIG_ERROR
}

fn repository_exit_code(err: &RepositoryError) -> u8 {
    match err {
        RepositoryError::Read { .. } => EXIT_READ_ERROR,
        RepositoryError::Write { .. } | RepositoryError::IdsExhausted => EXIT_WRITE_ERROR,
        RepositoryError::NotFound(_) => EXIT_NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StorageFault;
    use clap::CommandFactory;
    use std::io;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_format_is_case_insensitive() {
        let cli = Cli::try_parse_from(["rptodo", "export-all", "out.csv", "--format", "CSV"]).unwrap();
        match cli.command {
            Command::ExportAll(args) => {
                assert_eq!(args.format, crate::application::services::ExportFormat::Csv)
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn short_v_is_version_not_verbose() {
        let err = Cli::try_parse_from(["rptodo", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::try_parse_from(["rptodo", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        let read = anyhow::Error::new(RepositoryError::Read {
            path: "db.json".into(),
            source: StorageFault::Io(io::Error::other("boom")),
        })
        .context("Failed to list tasks");
        assert_eq!(exit_code(&read), EXIT_READ_ERROR);

        let write = anyhow::Error::new(RepositoryError::Write {
            path: "db.json".into(),
            source: StorageFault::Io(io::Error::other("disk full")),
        });
        assert_eq!(exit_code(&write), EXIT_WRITE_ERROR);

        let missing = anyhow::Error::new(ExportError::Repository(RepositoryError::NotFound(7)));
        assert_eq!(exit_code(&missing), EXIT_NOT_FOUND);

        let exhausted = anyhow::Error::new(RepositoryError::IdsExhausted);
        assert_eq!(exit_code(&exhausted), EXIT_WRITE_ERROR);

        let config = anyhow::Error::new(ConfigError::NotInitialized("c.json".into()));
        assert_eq!(exit_code(&config), EXIT_CONFIG_ERROR);
    }
}
