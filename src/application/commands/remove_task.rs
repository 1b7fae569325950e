use crate::application::commands::CommandContext;
use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemoveTaskArgs {
    /// ID of the to-do to remove
    pub todo_id: u64,
}

pub fn run_remove_task(ctx: &CommandContext, args: RemoveTaskArgs) -> anyhow::Result<()> {
    ctx.task_service
        .remove_task(args.todo_id)
        .context("Failed to remove task")?;
    println!("Task with ID {} removed successfully!", args.todo_id);
    Ok(())
}
