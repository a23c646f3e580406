//! File discovery seam.
//!
//! The core never touches the filesystem itself. It asks a [`FileLister`]
//! for paths matching a glob pattern and narrows the result to the requested
//! type codes. A path passes the type filter only when [`decompose`] assigns
//! it one of those codes, so filtering and grouping always agree.

use std::path::PathBuf;

use glob::Pattern;

use crate::decompose::decompose;

/// Lists files under a fixed root directory.
///
/// Returned paths are relative to the root and use `/` separators. No
/// ordering is guaranteed by the contract.
pub trait FileLister {
    /// List files matching a glob pattern (e.g., `**/*.abap`).
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] if the root is missing or the pattern is invalid.
    fn list(&self, pattern: &str) -> Result<Vec<String>, ListError>;
}

impl<T: FileLister + ?Sized> FileLister for &T {
    fn list(&self, pattern: &str) -> Result<Vec<String>, ListError> {
        (**self).list(pattern)
    }
}

impl<T: FileLister + ?Sized> FileLister for Box<T> {
    fn list(&self, pattern: &str) -> Result<Vec<String>, ListError> {
        (**self).list(pattern)
    }
}

/// Semantic error categories for listing failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListErrorKind {
    /// Root directory does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Glob pattern could not be compiled.
    InvalidPattern,
    /// Path is not valid UTF-8 or otherwise unusable.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// File listing error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct ListError {
    /// Semantic error category.
    pub kind: ListErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ListError {
    /// Create a new listing error.
    #[must_use]
    pub fn new(kind: ListErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(ListErrorKind::NotFound).with_path(path)
    }

    /// Create a listing error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ListErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ListErrorKind::PermissionDenied,
            _ => ListErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "Kind: message (path: /foo/bar)"
        let kind_str = match self.kind {
            ListErrorKind::NotFound => "Not found",
            ListErrorKind::PermissionDenied => "Permission denied",
            ListErrorKind::InvalidPattern => "Invalid pattern",
            ListErrorKind::InvalidPath => "Invalid path",
            ListErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Discovery query: structural suffix plus an optional type filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discovery {
    suffix: String,
    types: Option<Vec<String>>,
}

impl Discovery {
    /// Create a query for all files ending in `.<suffix>`.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            types: None,
        }
    }

    /// Narrow the query to the given type codes.
    ///
    /// `None` lists every file with the suffix. `Some(vec![])` lists nothing.
    #[must_use]
    pub fn with_types(mut self, types: Option<Vec<String>>) -> Self {
        self.types = types;
        self
    }

    /// Glob pattern handed to the file lister.
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("**/*.{}", Pattern::escape(&self.suffix))
    }

    /// Run the query against a lister.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] if the lister fails.
    pub fn run(&self, lister: &dyn FileLister) -> Result<Vec<String>, ListError> {
        let pattern = self.pattern();
        let paths = lister.list(&pattern)?;
        tracing::debug!(%pattern, count = paths.len(), "Listed source files");

        let Some(types) = &self.types else {
            return Ok(paths);
        };

        let paths: Vec<String> = paths
            .into_iter()
            .filter(|path| self.has_type(path, types))
            .collect();
        tracing::debug!(types = ?types, count = paths.len(), "Applied type filter");

        Ok(paths)
    }

    fn has_type(&self, path: &str, types: &[String]) -> bool {
        let entry = decompose(path, &self.suffix);
        types.iter().any(|t| *t == entry.type_code)
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new("abap")
    }
}
