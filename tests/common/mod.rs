#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bcs-validate binary.
#[macro_export]
macro_rules! bcs_validate {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bcs-validate"))
    };
}

/// A temporary workspace holding a corpus under `data/`.
pub struct CorpusFixture {
    pub dir: TempDir,
}

impl CorpusFixture {
    /// Creates an empty workspace without a `data/` directory.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a workspace with a small corpus that passes every check.
    pub fn valid() -> Self {
        let fixture = Self::empty();
        fixture.create_rule("00-header");
        fixture.create_rule("01-layout/00-section");
        fixture.create_rule("01-layout/01-shebang");
        fixture.create_rule("01-layout/02-strict-mode");
        fixture.create_rule("02-variables/00-section");
        fixture.create_rule("02-variables/01-declare");
        fixture.create_file("README.md", "# BCS corpus\n");
        fixture
    }

    /// Creates a file relative to the corpus root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.root().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates all three tiers of a rule at `base` (relative to the corpus root).
    pub fn create_rule(&self, base: &str) {
        for tier in ["complete", "summary", "abstract"] {
            self.create_file(&format!("{base}.{tier}.md"), &format!("# {base} ({tier})\n"));
        }
    }

    /// Removes a file relative to the corpus root.
    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.root().join(relative_path)).expect("Failed to remove file");
    }

    /// Writes `.bcs-validate.toml` into the workspace.
    pub fn create_config(&self, content: &str) {
        fs::write(self.path().join(".bcs-validate.toml"), content)
            .expect("Failed to write config");
    }

    /// The workspace directory, used as the working directory of the binary.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The corpus root, `<workspace>/data`.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("data")
    }
}
