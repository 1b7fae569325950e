use crate::application::commands::CommandContext;
use crate::application::services::ExportFormat;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportAllArgs {
    /// Path to save the to-do list export
    pub output_path: PathBuf,
    /// Export format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t)]
    pub format: ExportFormat,
}

#[derive(Debug, Args)]
pub struct ExportTaskArgs {
    /// ID of the to-do to export
    pub todo_id: u64,
    /// File to write the to-do task to
    pub output_path: PathBuf,
    /// Export format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t)]
    pub format: ExportFormat,
}

pub fn run_export_all(ctx: &CommandContext, args: ExportAllArgs) -> anyhow::Result<()> {
    ctx.export_service
        .export_all(&args.output_path, args.format)
        .context("Failed to export tasks")?;
    println!("Tasks exported to {}", args.output_path.display());
    Ok(())
}

pub fn run_export_task(ctx: &CommandContext, args: ExportTaskArgs) -> anyhow::Result<()> {
    ctx.export_service
        .export_task(args.todo_id, &args.output_path, args.format)
        .with_context(|| format!("Failed to export task {}", args.todo_id))?;
    println!("Task {} exported to {}", args.todo_id, args.output_path.display());
    Ok(())
}
