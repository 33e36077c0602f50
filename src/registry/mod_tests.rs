use std::path::PathBuf;

use super::*;

#[test]
fn static_registry_lists_in_given_order() {
    let registry = StaticRegistry::new([("BCS0102", "b"), ("BCS0101", "a"), ("BCS0102", "c")]);
    assert_eq!(
        registry.list_codes().unwrap(),
        vec!["BCS0102", "BCS0101", "BCS0102"]
    );
}

#[test]
fn static_registry_decode_returns_first_match() {
    let registry = StaticRegistry::new([("BCS0102", "b"), ("BCS0102", "c")]);
    assert_eq!(registry.decode("BCS0102").unwrap(), PathBuf::from("b"));
    assert!(matches!(
        registry.decode("BCS0999"),
        Err(BcsError::CodeNotFound(_))
    ));
}

#[test]
fn disabled_registry_is_always_unavailable() {
    let registry = DisabledRegistry;
    assert!(matches!(
        registry.list_codes(),
        Err(BcsError::RegistryUnavailable(_))
    ));
    assert!(matches!(
        registry.decode("BCS0101"),
        Err(BcsError::RegistryUnavailable(_))
    ));
}

#[test]
fn registry_source_deserializes_from_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        source: RegistrySource,
    }

    let parsed: Wrapper = toml::from_str("source = \"none\"").unwrap();
    assert_eq!(parsed.source, RegistrySource::Disabled);
    let parsed: Wrapper = toml::from_str("source = \"tree\"").unwrap();
    assert_eq!(parsed.source, RegistrySource::Tree);
}
