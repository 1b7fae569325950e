use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `rptodo=trace`.
pub const LOG_ENV: &str = "RPTODO_LOG";

pub fn setup_logging(verbose: bool) {
    // stdout carries command output, so logs go to stderr and stay quiet by default
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // a second install keeps the first subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
}
