use clap::Parser;
use dotenvy::dotenv;
use rptodo::application::commands::{self, Cli};
use rptodo::utils;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    utils::setup_logging(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::from(commands::exit_code(&e))
        }
    }
}
