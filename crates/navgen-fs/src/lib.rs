//! Filesystem file lister for navgen.
//!
//! This crate provides [`GlobLister`], a filesystem-based implementation of
//! the [`FileLister`](navgen_core::FileLister) trait backed by the `glob`
//! crate.
//!
//! # Example
//!
//! ```ignore
//! use navgen_core::{SidebarBuilder, SidebarOptions};
//! use navgen_fs::GlobLister;
//!
//! let lister = GlobLister::new("abap");
//! let nav = SidebarBuilder::new(lister, SidebarOptions::default()).build()?;
//! ```

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use navgen_core::{FileLister, ListError, ListErrorKind};

/// Lists files under a root directory with glob patterns.
///
/// Only regular files are returned. Paths are relative to the root, joined
/// with `/`, in the order the `glob` crate yields them (alphabetical within
/// each directory). Hidden files and directories are skipped unless enabled
/// with [`with_hidden`](Self::with_hidden).
#[derive(Debug, Clone)]
pub struct GlobLister {
    root: PathBuf,
    include_hidden: bool,
}

impl GlobLister {
    /// Create a lister rooted at `root`.
    ///
    /// `.` components are dropped from the root so matched paths can be made
    /// relative again.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root: PathBuf = root.into();
        let normalized: PathBuf = root
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        Self {
            root: if normalized.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                normalized
            },
            include_hidden: false,
        }
    }

    /// Include files and directories whose names start with `.`.
    #[must_use]
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: !self.include_hidden,
        }
    }

    /// Convert a matched path to a `/`-joined path relative to the root.
    fn relative(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let parts: Option<Vec<&str>> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_str()),
                _ => None,
            })
            .collect();
        parts.map(|parts| parts.join("/"))
    }
}

impl FileLister for GlobLister {
    fn list(&self, pattern: &str) -> Result<Vec<String>, ListError> {
        let metadata = std::fs::metadata(&self.root)
            .map_err(|e| ListError::io(e, Some(self.root.clone())))?;
        if !metadata.is_dir() {
            return Err(ListError::not_found(&self.root));
        }

        let root = self.root.to_str().ok_or_else(|| {
            ListError::new(ListErrorKind::InvalidPath).with_path(&self.root)
        })?;
        let root = root.trim_end_matches('/');
        let full_pattern = if root.is_empty() {
            format!("/{pattern}")
        } else {
            format!("{}/{pattern}", Pattern::escape(root))
        };

        let entries = glob::glob_with(&full_pattern, self.match_options()).map_err(|e| {
            ListError::new(ListErrorKind::InvalidPattern)
                .with_path(&self.root)
                .with_source(e)
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(
                        path = %e.path().display(),
                        error = %e.error(),
                        "Skipping unreadable entry"
                    );
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            match self.relative(&path) {
                Some(rel) => files.push(rel),
                None => {
                    tracing::warn!(path = %path.display(), "Skipping non UTF-8 path");
                }
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            %pattern,
            count = files.len(),
            "Glob listing completed"
        );
        Ok(files)
    }
}
