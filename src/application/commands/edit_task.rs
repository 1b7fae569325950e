use crate::application::commands::CommandContext;
use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditTaskArgs {
    /// ID of the task to edit
    pub todo_id: u64,
    /// New description for the task
    pub new_task: String,
}

pub fn run_edit_task(ctx: &CommandContext, args: EditTaskArgs) -> anyhow::Result<()> {
    ctx.task_service
        .edit_task(args.todo_id, &args.new_task)
        .with_context(|| format!("Failed to edit task {}", args.todo_id))?;
    println!("Task {} updated.", args.todo_id);
    Ok(())
}
