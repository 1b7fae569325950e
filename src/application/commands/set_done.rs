use crate::application::commands::CommandContext;
use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct SetDoneArgs {
    /// ID of the task to update
    pub todo_id: u64,
}

/// Shared by `done` and `undone`.
pub fn run_set_done(ctx: &CommandContext, args: SetDoneArgs, done: bool) -> anyhow::Result<()> {
    let id = args.todo_id;
    let result = if done {
        ctx.task_service.mark_done(id)
    } else {
        ctx.task_service.mark_undone(id)
    };
    result.with_context(|| format!("Failed to update task {id}"))?;

    let state = if done { "done" } else { "not done" };
    println!("Task {id} marked as {state}.");
    Ok(())
}
