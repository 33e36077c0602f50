//! In-memory model of the tiered rule corpus.
//!
//! Each rule lives at a base path (`<section>/NN-rule-name`) and is written
//! out at three detail levels, one file per tier:
//! `{base}.complete.md`, `{base}.summary.md` and `{base}.abstract.md`.

pub mod naming;

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::scanner::{CorpusWalker, WalkError};

/// Detail level of a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Complete,
    Summary,
    Abstract,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Complete, Self::Summary, Self::Abstract];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Summary => "summary",
            Self::Abstract => "abstract",
        }
    }

    /// File name suffix, e.g. `.summary.md`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Complete => ".complete.md",
            Self::Summary => ".summary.md",
            Self::Abstract => ".abstract.md",
        }
    }

    /// Split `01-x.summary.md` into (`01-x`, `Summary`).
    #[must_use]
    pub fn split(file_name: &str) -> Option<(&str, Self)> {
        Self::ALL.into_iter().find_map(|tier| {
            file_name
                .strip_suffix(tier.suffix())
                .filter(|stem| !stem.is_empty())
                .map(|stem| (stem, tier))
        })
    }

    #[must_use]
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}{}", self.suffix())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical tier file as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierFile {
    pub path: PathBuf,
    pub tier: Tier,
    pub size: u64,
    pub lines: usize,
    pub exists: bool,
}

impl TierFile {
    /// Stat a tier file and count its lines.
    ///
    /// A missing file is reported through `exists`, not as an error.
    ///
    /// # Errors
    /// Returns any I/O error other than `NotFound`.
    pub fn inspect(path: &Path, tier: Tier) -> io::Result<Self> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self {
                    path: path.to_path_buf(),
                    tier,
                    size: 0,
                    lines: 0,
                    exists: false,
                });
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path: path.to_path_buf(),
            tier,
            size: content.len() as u64,
            lines: count_lines(&content),
            exists: true,
        })
    }
}

fn count_lines(content: &[u8]) -> usize {
    let newlines = content.iter().filter(|&&b| b == b'\n').count();
    if content.last().is_some_and(|&b| b != b'\n') {
        newlines + 1
    } else {
        newlines
    }
}

/// A top-level `NN-name` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: String,
    pub name: String,
    pub path: PathBuf,
}

impl Section {
    #[must_use]
    pub fn parse(path: &Path) -> Option<Self> {
        let dir_name = path.file_name()?.to_str()?;
        let number = naming::numeric_prefix(dir_name)?;
        Some(Self {
            number: number.to_string(),
            name: dir_name[number.len() + 1..].to_string(),
            path: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn section_file(&self, tier: Tier) -> PathBuf {
        self.path.join(tier.file_name(naming::SECTION_STEM))
    }
}

/// A rule and the tiers it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Absolute base path without the tier suffix.
    pub base_path: PathBuf,
    /// Base path relative to the corpus root.
    pub relative_base: PathBuf,
    pub tiers: BTreeSet<Tier>,
}

impl Rule {
    #[must_use]
    pub fn stem(&self) -> String {
        self.base_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tier_path(&self, tier: Tier) -> PathBuf {
        self.base_path.with_file_name(tier.file_name(&self.stem()))
    }

    #[must_use]
    pub fn has(&self, tier: Tier) -> bool {
        self.tiers.contains(&tier)
    }

    /// `00-header` files describe the whole corpus rather than a rule.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.stem().starts_with(naming::HEADER_STEM)
    }

    #[must_use]
    pub fn code(&self) -> Option<BcsCode> {
        BcsCode::from_relative_path(&self.relative_base)
    }
}

/// A rule identifier such as `BCS0102`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BcsCode(String);

impl BcsCode {
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        naming::is_bcs_code(code).then(|| Self(code.to_string()))
    }

    /// Derive a code from a rule's position below the root.
    ///
    /// Every component contributes its two-digit prefix; a trailing
    /// `00-section` names the section itself. The root header has no code.
    #[must_use]
    pub fn from_relative_path(relative_base: &Path) -> Option<Self> {
        let mut components: Vec<&str> = relative_base
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;

        if components.last() == Some(&naming::SECTION_STEM) && components.len() > 1 {
            components.pop();
        }
        if components.first() == Some(&naming::HEADER_STEM) {
            return None;
        }

        let mut code = String::from("BCS");
        for component in components {
            code.push_str(naming::numeric_prefix(component)?);
        }
        Some(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BcsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rules discovered in one pass over the tree.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub rules: Vec<Rule>,
    /// Walk problems met during discovery.
    pub issues: Vec<WalkError>,
}

impl Corpus {
    /// Discover rules with the given walker.
    ///
    /// Rules are grouped by base path in walk order; a rule exists as soon as
    /// any of its tier files does.
    #[must_use]
    pub fn discover(walker: &CorpusWalker<'_>) -> Self {
        let mut corpus = Self::default();
        let mut rules: IndexMap<PathBuf, Rule> = IndexMap::new();

        for item in walker.files() {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    corpus.issues.push(err);
                    continue;
                }
            };

            let file_name = entry.file_name();
            let Some((stem, tier)) = Tier::split(&file_name) else {
                continue;
            };
            let base_path = entry.path.with_file_name(stem);
            let relative_base = entry.relative.with_file_name(stem);
            rules
                .entry(base_path.clone())
                .or_insert_with(|| Rule {
                    base_path,
                    relative_base,
                    tiers: BTreeSet::new(),
                })
                .tiers
                .insert(tier);
        }

        corpus.rules = rules.into_values().collect();
        corpus
    }

    /// Rules carrying a `complete` tier, excluding headers.
    pub fn authored_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(|r| r.has(Tier::Complete) && !r.is_header())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
