use crate::application::commands::CommandContext;
use anyhow::Context;

pub fn run_list_tasks(ctx: &CommandContext) -> anyhow::Result<()> {
    let tasks = ctx
        .task_service
        .list_tasks()
        .context("Failed to read tasks")?;

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    for task in &tasks {
        println!("{} {}: {}", task.status_marker(), task.id, task.task);
    }
    Ok(())
}
