use crate::application::commands::CommandContext;
use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddTaskArgs {
    /// Task description
    pub task: String,
}

pub fn run_add_task(ctx: &CommandContext, args: AddTaskArgs) -> anyhow::Result<()> {
    let id = ctx
        .task_service
        .add_task(&args.task)
        .context("Failed to add task")?;
    println!("Task added: \"{}\" (ID {})", args.task, id);
    Ok(())
}
