mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Which part of the tree a walk covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkScope {
    /// Every entry, including `templates/` and `README.md` files.
    #[default]
    All,
    /// Only authored rule content: `templates/` and `README.md` are skipped.
    Authored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Not followed; reported like a regular file.
    Symlink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub path: PathBuf,
    /// Path relative to the corpus root.
    pub relative: PathBuf,
    pub kind: EntryKind,
    /// Depth below the corpus root (direct children are 1).
    pub depth: usize,
}

impl CorpusEntry {
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// A problem met while walking. A missing root is structural; everything
/// else concerns a single entry and does not stop the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    RootMissing { root: PathBuf },
    Io { path: Option<PathBuf>, message: String },
}

impl WalkError {
    #[must_use]
    pub const fn is_root_missing(&self) -> bool {
        matches!(self, Self::RootMissing { .. })
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootMissing { root } => {
                write!(f, "corpus root not found: {}", root.display())
            }
            Self::Io {
                path: Some(path),
                message,
            } => write!(f, "cannot read {}: {message}", path.display()),
            Self::Io {
                path: None,
                message,
            } => write!(f, "walk error: {message}"),
        }
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io {
            path: err.path().map(Path::to_path_buf),
            message: err
                .io_error()
                .map_or_else(|| err.to_string(), ToString::to_string),
        }
    }
}

/// Enumerates the corpus tree in lexicographic order.
///
/// Symlinks are never followed, so the walk cannot leave the root.
pub struct CorpusWalker<'a> {
    root: &'a Path,
    filter: &'a dyn FileFilter,
    scope: WalkScope,
    max_depth: Option<usize>,
}

impl<'a> CorpusWalker<'a> {
    #[must_use]
    pub fn new(root: &'a Path, filter: &'a dyn FileFilter) -> Self {
        Self {
            root,
            filter,
            scope: WalkScope::All,
            max_depth: None,
        }
    }

    #[must_use]
    pub const fn scope(mut self, scope: WalkScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Files and symlinks only.
    #[must_use]
    pub fn files(&self) -> Walk<'a> {
        self.walk(true)
    }

    /// Files, symlinks and directories, excluding the root itself.
    #[must_use]
    pub fn entries(&self) -> Walk<'a> {
        self.walk(false)
    }

    fn walk(&self, files_only: bool) -> Walk<'a> {
        if !self.root.is_dir() {
            return Walk {
                root: self.root,
                filter: self.filter,
                scope: self.scope,
                files_only,
                inner: None,
                pending: Some(WalkError::RootMissing {
                    root: self.root.to_path_buf(),
                }),
            };
        }

        let mut walker = WalkDir::new(self.root)
            .follow_links(false)
            .sort_by(|a, b| path_order_key(a).cmp(&path_order_key(b)));
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        Walk {
            root: self.root,
            filter: self.filter,
            scope: self.scope,
            files_only,
            inner: Some(walker.into_iter()),
            pending: None,
        }
    }
}

/// Directories sort as if their name ended in `/`, so the depth-first walk
/// visits entries in the same order as sorting their full paths.
fn path_order_key(entry: &walkdir::DirEntry) -> OsString {
    let mut key = entry.file_name().to_os_string();
    if entry.file_type().is_dir() {
        key.push("/");
    }
    key
}

/// Lazy iterator over corpus entries.
pub struct Walk<'a> {
    root: &'a Path,
    filter: &'a dyn FileFilter,
    scope: WalkScope,
    files_only: bool,
    inner: Option<walkdir::IntoIter>,
    pending: Option<WalkError>,
}

impl Iterator for Walk<'_> {
    type Item = Result<CorpusEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }
        let inner = self.inner.as_mut()?;

        loop {
            let entry = match inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(WalkError::from(err))),
            };
            if entry.depth() == 0 {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(self.root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();
            let file_type = entry.file_type();

            if !self.filter.should_include(&relative, self.scope) {
                if file_type.is_dir() {
                    debug!(path = %relative.display(), "skipping excluded directory");
                    inner.skip_current_dir();
                }
                continue;
            }

            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_symlink() {
                EntryKind::Symlink
            } else {
                EntryKind::File
            };
            if self.files_only && kind == EntryKind::Dir {
                continue;
            }

            return Some(Ok(CorpusEntry {
                depth: entry.depth(),
                path: entry.into_path(),
                relative,
                kind,
            }));
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
