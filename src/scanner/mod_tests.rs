use std::fs;
use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

fn relatives(walk: Walk<'_>) -> Vec<PathBuf> {
    walk.map(|e| e.unwrap().relative).collect()
}

#[test]
fn files_are_sorted_lexicographically() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "02-b/01-x.complete.md");
    touch(temp_dir.path(), "01-a/02-y.complete.md");
    touch(temp_dir.path(), "01-a/01-x.complete.md");
    touch(temp_dir.path(), "00-header.complete.md");

    let filter = GlobFilter::new(&[]).unwrap();
    let walker = CorpusWalker::new(temp_dir.path(), &filter);

    assert_eq!(
        relatives(walker.files()),
        vec![
            PathBuf::from("00-header.complete.md"),
            PathBuf::from("01-a/01-x.complete.md"),
            PathBuf::from("01-a/02-y.complete.md"),
            PathBuf::from("02-b/01-x.complete.md"),
        ]
    );
}

#[test]
fn entries_include_directories_but_not_root() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "01-a/01-x.complete.md");

    let filter = GlobFilter::new(&[]).unwrap();
    let walker = CorpusWalker::new(temp_dir.path(), &filter);
    let entries: Vec<_> = walker.entries().map(Result::unwrap).collect();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_dir());
    assert_eq!(entries[0].depth, 1);
    assert_eq!(entries[1].file_name(), "01-x.complete.md");
    assert_eq!(entries[1].depth, 2);
}

#[test]
fn authored_scope_prunes_templates_and_readme() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "README.md");
    touch(temp_dir.path(), "templates/rule.complete.md");
    touch(temp_dir.path(), "01-a/01-x.complete.md");

    let filter = GlobFilter::new(&[]).unwrap();
    let all = CorpusWalker::new(temp_dir.path(), &filter);
    let authored = CorpusWalker::new(temp_dir.path(), &filter).scope(WalkScope::Authored);

    assert_eq!(all.files().count(), 3);
    assert_eq!(
        relatives(authored.files()),
        vec![PathBuf::from("01-a/01-x.complete.md")]
    );
}

#[test]
fn max_depth_limits_walk_to_top_level() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "01-a/01-x.complete.md");
    touch(temp_dir.path(), "00-header.complete.md");

    let filter = GlobFilter::new(&[]).unwrap();
    let walker = CorpusWalker::new(temp_dir.path(), &filter).max_depth(1);

    assert_eq!(
        relatives(walker.entries()),
        vec![PathBuf::from("00-header.complete.md"), PathBuf::from("01-a")]
    );
}

#[test]
fn missing_root_yields_single_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("data");

    let filter = GlobFilter::new(&[]).unwrap();
    let walker = CorpusWalker::new(&missing, &filter);
    let items: Vec<_> = walker.files().collect();

    assert_eq!(items.len(), 1);
    let err = items[0].as_ref().unwrap_err();
    assert!(err.is_root_missing());
    assert!(err.to_string().contains("corpus root not found"));
}

#[test]
fn root_that_is_a_file_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "data");

    let filter = GlobFilter::new(&[]).unwrap();
    let root = temp_dir.path().join("data");
    let walker = CorpusWalker::new(&root, &filter);

    assert!(walker.entries().next().unwrap().unwrap_err().is_root_missing());
}

#[cfg(unix)]
#[test]
fn symlinks_are_listed_but_not_followed() {
    let temp_dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    touch(outside.path(), "01-secret.complete.md");
    touch(temp_dir.path(), "01-a/01-x.complete.md");
    std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("01-a/02-link")).unwrap();

    let filter = GlobFilter::new(&[]).unwrap();
    let walker = CorpusWalker::new(temp_dir.path(), &filter);
    let files: Vec<_> = walker.files().map(Result::unwrap).collect();

    assert_eq!(files.len(), 2);
    assert_eq!(files[1].kind, EntryKind::Symlink);
    assert!(files.iter().all(|f| !f.relative.ends_with("01-secret.complete.md")));
}

#[test]
fn walk_error_display_includes_path() {
    let err = WalkError::Io {
        path: Some(PathBuf::from("data/01-a")),
        message: "Permission denied".to_string(),
    };
    assert_eq!(err.to_string(), "cannot read data/01-a: Permission denied");
    assert!(!err.is_root_missing());
}

#[test]
fn walk_order_matches_full_path_order() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "01-a/02-shebang/01-dual.complete.md");
    touch(temp_dir.path(), "01-a/02-shebang.complete.md");
    touch(temp_dir.path(), "01-a/02-shebang-extra.complete.md");

    let filter = GlobFilter::new(&[]).unwrap();
    let walker = CorpusWalker::new(temp_dir.path(), &filter);
    let files = relatives(walker.files());

    let mut sorted = files.clone();
    sorted.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    assert_eq!(files, sorted);
    assert_eq!(files[0], PathBuf::from("01-a/02-shebang-extra.complete.md"));
}
