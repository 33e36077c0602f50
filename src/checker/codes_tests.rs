use std::path::PathBuf;

use super::*;
use crate::checker::CheckStatus;
use crate::checker::test_support::{DISABLED, context, filter, write_rule};
use crate::registry::{CodeRegistry, StaticRegistry, TreeRegistry};
use tempfile::TempDir;

struct BrokenRegistry;

impl CodeRegistry for BrokenRegistry {
    fn decode(&self, code: &str) -> Result<PathBuf> {
        Err(BcsError::CodeNotFound(code.to_string()))
    }

    fn list_codes(&self) -> Result<Vec<String>> {
        Err(BcsError::Config("corrupt registry".to_string()))
    }
}

#[test]
fn unique_codes_pass() {
    let temp_dir = TempDir::new().unwrap();
    let filter = filter();
    let registry = StaticRegistry::new([("BCS0101", "a"), ("BCS0102", "b")]);
    let ctx = context(temp_dir.path(), &filter, &registry);

    let result = CodeUniqueness.run(&ctx).unwrap();
    assert_eq!(result.status, CheckStatus::Pass);
    assert_eq!(result.summary, "2 codes, all unique");
}

#[test]
fn each_repeat_is_one_error() {
    let temp_dir = TempDir::new().unwrap();
    let filter = filter();
    let registry = StaticRegistry::new([
        ("BCS0101", "a"),
        ("BCS0102", "b"),
        ("BCS0101", "c"),
        ("BCS0101", "d"),
    ]);
    let ctx = context(temp_dir.path(), &filter, &registry);

    let result = CodeUniqueness.run(&ctx).unwrap();
    assert_eq!(result.status, CheckStatus::Fail);
    assert_eq!(result.errors(), 2);
    assert!(result.message().contains("duplicate code BCS0101 (first: a)"));
}

#[test]
fn unavailable_registry_is_a_warning() {
    let temp_dir = TempDir::new().unwrap();
    let filter = filter();
    let ctx = context(temp_dir.path(), &filter, &DISABLED);

    let result = CodeUniqueness.run(&ctx).unwrap();
    assert_eq!(result.status, CheckStatus::Warn);
    assert_eq!((result.errors(), result.warnings()), (0, 1));
    assert!(
        result
            .message()
            .contains("registry unavailable, skipping uniqueness check")
    );
}

#[test]
fn other_registry_errors_propagate() {
    let temp_dir = TempDir::new().unwrap();
    let filter = filter();
    let ctx = context(temp_dir.path(), &filter, &BrokenRegistry);

    assert!(matches!(
        CodeUniqueness.run(&ctx),
        Err(BcsError::Config(_))
    ));
}

#[test]
fn malformed_codes_warn() {
    let temp_dir = TempDir::new().unwrap();
    let filter = filter();
    let registry = StaticRegistry::new([("BCS0101", "a"), ("bcs-x", "b")]);
    let ctx = context(temp_dir.path(), &filter, &registry);

    let result = CodeUniqueness.run(&ctx).unwrap();
    assert_eq!(result.status, CheckStatus::Warn);
    assert!(result.message().contains("malformed code: bcs-x"));
}

#[test]
fn tree_registry_surfaces_shared_prefixes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_rule(root, "02-variables/03-arrays");
    write_rule(root, "02-variables/03-readonly");
    let filter = filter();
    let registry = TreeRegistry::scan(root, &filter);
    let ctx = context(root, &filter, &registry);

    let result = CodeUniqueness.run(&ctx).unwrap();
    assert_eq!(result.errors(), 1);
    assert!(
        result
            .message()
            .contains("duplicate code BCS0203 (first: 02-variables/03-arrays.complete.md)")
    );
}
