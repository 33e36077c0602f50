use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn defaults() {
    let cli = Cli::parse_from(["bcs-validate"]);
    assert_eq!(cli.root, PathBuf::from("data"));
    assert!(!cli.quiet);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.exit_on_error);
    assert!(!cli.json);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(cli.summary_limit.is_none());
    assert!(cli.registry.is_none());
}

#[test]
fn root_and_limits() {
    let cli = Cli::parse_from([
        "bcs-validate",
        "corpus",
        "--summary-limit",
        "8000",
        "--abstract-limit",
        "900",
    ]);
    assert_eq!(cli.root, PathBuf::from("corpus"));
    assert_eq!(cli.summary_limit, Some(8_000));
    assert_eq!(cli.abstract_limit, Some(900));
}

#[test]
fn zero_limit_is_rejected() {
    assert!(Cli::try_parse_from(["bcs-validate", "--summary-limit", "0"]).is_err());
    assert!(Cli::try_parse_from(["bcs-validate", "--abstract-limit", "abc"]).is_err());
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["bcs-validate", "-q", "-v"]).is_err());
}

#[test]
fn config_conflicts_with_no_config() {
    assert!(Cli::try_parse_from(["bcs-validate", "-c", "x.toml", "--no-config"]).is_err());
}

#[test]
fn verbose_counts() {
    let cli = Cli::parse_from(["bcs-validate", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn registry_options() {
    let cli = Cli::parse_from([
        "bcs-validate",
        "--registry",
        "none",
        "--registry-cmd",
        "/opt/bcs",
        "--registry-timeout",
        "3",
    ]);
    assert_eq!(cli.registry, Some(RegistrySource::Disabled));
    assert_eq!(cli.registry_cmd.as_deref(), Some("/opt/bcs"));
    assert_eq!(cli.registry_timeout, Some(3));

    let cli = Cli::parse_from(["bcs-validate", "--registry", "tree"]);
    assert_eq!(cli.registry, Some(RegistrySource::Tree));
}

#[test]
fn json_and_exit_on_error_flags() {
    let cli = Cli::parse_from(["bcs-validate", "--json", "--exit-on-error", "--color", "never"]);
    assert!(cli.json);
    assert!(cli.exit_on_error);
    assert_eq!(cli.color, ColorChoice::Never);
}
