use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::registry::RegistrySource;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "bcs-validate")]
#[command(author, version, about = "Validate the structure of a tiered BCS rule corpus")]
#[command(long_about = "Walks a tiered rule corpus and checks tier completeness, naming, \
    code uniqueness, section and header files, and size budgets.\n\n\
    Exit codes:\n  \
    0 - No validation errors\n  \
    1 - Validation errors found\n  \
    2 - Invalid arguments or setup failure")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Corpus root directory
    #[arg(default_value = "data")]
    pub root: PathBuf,

    /// Show only failing checks and the failure summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show progress (default); -vv lists every finding
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Stop after the first failing check
    #[arg(long)]
    pub exit_on_error: bool,

    /// Byte limit for summary tier files
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub summary_limit: Option<u64>,

    /// Byte limit for abstract tier files
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub abstract_limit: Option<u64>,

    /// Print a JSON report on stdout (implies --quiet)
    #[arg(long)]
    pub json: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Where BCS codes come from
    #[arg(long, value_enum)]
    pub registry: Option<RegistrySource>,

    /// Program answering `codes` and `decode <CODE>`
    #[arg(long, value_name = "PROGRAM")]
    pub registry_cmd: Option<String>,

    /// Seconds to wait for the registry program
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub registry_timeout: Option<u64>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
