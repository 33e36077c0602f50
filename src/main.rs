use clap::Parser;
use tracing_subscriber::EnvFilter;

use bcs_validate::cli::Cli;
use bcs_validate::commands::run_validate;

/// Environment variable holding the log filter, e.g. `BCS_VALIDATE_LOG=debug`.
const LOG_ENV: &str = "BCS_VALIDATE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    std::process::exit(run_validate(&cli));
}
