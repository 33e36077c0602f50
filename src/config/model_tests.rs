use super::*;

#[test]
fn defaults_match_documented_budgets() {
    let config = Config::default();
    assert_eq!(config.limits.summary_limit, 10_000);
    assert_eq!(config.limits.abstract_limit, 1_500);
    assert_eq!(config.registry.source, RegistrySource::Command);
    assert_eq!(config.registry.command, "bcs");
    assert_eq!(config.registry.timeout_secs, 10);
    assert!(config.scanner.exclude.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_parses_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config: Config = toml::from_str(
        r#"
        [limits]
        abstract = 2000

        [registry]
        source = "tree"
        "#,
    )
    .unwrap();

    assert_eq!(config.limits.summary_limit, 10_000);
    assert_eq!(config.limits.abstract_limit, 2_000);
    assert_eq!(config.registry.source, RegistrySource::Tree);
    assert_eq!(config.registry.command, "bcs");
}

#[test]
fn full_document_parses() {
    let config: Config = toml::from_str(
        r#"
        [limits]
        summary = 8000
        abstract = 1200

        [scanner]
        exclude = ["**/drafts/**"]

        [registry]
        source = "command"
        command = "/usr/local/bin/bcs"
        args = ["--data", "data"]
        timeout_secs = 3
        "#,
    )
    .unwrap();

    assert_eq!(config.limits.summary_limit, 8_000);
    assert_eq!(config.scanner.exclude, vec!["**/drafts/**"]);
    assert_eq!(config.registry.args, vec!["--data", "data"]);
    assert_eq!(config.registry.timeout_secs, 3);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[limits]\nrulet = 10\n");
    assert!(result.is_err());

    let result: std::result::Result<Config, _> = toml::from_str("[output]\nformat = \"json\"\n");
    assert!(result.is_err());
}

#[test]
fn validate_rejects_zero_limits() {
    let mut config = Config::default();
    config.limits.summary_limit = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("limits.summary"));

    let mut config = Config::default();
    config.limits.abstract_limit = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.registry.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_empty_command_only_for_command_source() {
    let mut config = Config::default();
    config.registry.command = "  ".to_string();
    assert!(config.validate().is_err());

    config.registry.source = RegistrySource::Tree;
    assert!(config.validate().is_ok());
}
