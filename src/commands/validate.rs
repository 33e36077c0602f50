use std::io;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::EXIT_SETUP_ERROR;
use crate::checker::{CheckContext, CheckSuite, SuiteObserver};
use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, RegistryConfig};
use crate::error::{BcsError, Result};
use crate::output::{
    CheckProgress, ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::registry::{
    CodeRegistry, CommandRegistry, DisabledRegistry, RegistrySource, TreeRegistry,
};
use crate::report::{Aggregator, ValidationReport};
use crate::scanner::GlobFilter;

#[must_use]
pub fn run_validate(cli: &Cli) -> i32 {
    match run_validate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_SETUP_ERROR
        }
    }
}

/// Validate the corpus named on the command line and report the result.
///
/// # Errors
/// Setup failures only: configuration, exclude patterns, or a root that
/// cannot be inspected. Validation problems are reported, not returned.
pub fn run_validate_impl(cli: &Cli) -> Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 2. Refuse roots that exist but cannot be stat'd
    ensure_root_inspectable(&cli.root)?;

    // 3. Build the walk filter and code registry
    let filter = GlobFilter::new(&config.scanner.exclude)?;
    let registry = build_registry(&config.registry, &cli.root, &filter);

    let ctx = CheckContext {
        root: &cli.root,
        filter: &filter,
        registry: registry.as_ref(),
        limits: config.limits,
    };

    // 4. Run the suite and report
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let report = match format {
        OutputFormat::Json => {
            let report = run_suite(&ctx, cli.exit_on_error, &mut ());
            println!("{}", JsonFormatter.format(&report)?);
            report
        }
        OutputFormat::Text => {
            let formatter =
                TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                    .with_quiet(cli.quiet);
            if let Some(header) = formatter.format_header(&cli.root) {
                eprintln!("{header}");
            }

            let mut progress = CheckProgress::new(&formatter);
            let report = run_suite(&ctx, cli.exit_on_error, &mut progress);
            progress.finish();

            let summary = formatter.format(&report)?;
            if !summary.is_empty() {
                eprintln!("{summary}");
            }
            report
        }
    };

    Ok(report.exit_code())
}

fn run_suite(
    ctx: &CheckContext<'_>,
    exit_on_error: bool,
    observer: &mut dyn SuiteObserver,
) -> ValidationReport {
    let mut aggregator = Aggregator::new(exit_on_error);
    CheckSuite::standard().run(ctx, &mut aggregator, observer);
    aggregator.finish()
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(limit) = cli.summary_limit {
        config.limits.summary_limit = limit;
    }
    if let Some(limit) = cli.abstract_limit {
        config.limits.abstract_limit = limit;
    }
    if let Some(source) = cli.registry {
        config.registry.source = source;
    }
    if let Some(command) = &cli.registry_cmd {
        config.registry.command.clone_from(command);
    }
    if let Some(timeout) = cli.registry_timeout {
        config.registry.timeout_secs = timeout;
    }
}

/// A missing root is left to the checks; any other stat failure is fatal.
pub(crate) fn ensure_root_inspectable(root: &Path) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(_) => Ok(()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            debug!(root = %root.display(), "corpus root missing");
            Ok(())
        }
        Err(source) => Err(BcsError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn build_registry(
    config: &RegistryConfig,
    root: &Path,
    filter: &GlobFilter,
) -> Box<dyn CodeRegistry> {
    debug!(source = ?config.source, "using code registry");
    match config.source {
        RegistrySource::Command => Box::new(
            CommandRegistry::new(config.command.clone())
                .with_args(config.args.clone())
                .with_timeout(Duration::from_secs(config.timeout_secs)),
        ),
        RegistrySource::Tree => Box::new(TreeRegistry::scan(root, filter)),
        RegistrySource::Disabled => Box::new(DisabledRegistry),
    }
}

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
