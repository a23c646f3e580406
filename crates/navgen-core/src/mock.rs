//! In-memory file lister for unit tests.

use std::sync::RwLock;

use crate::discovery::{FileLister, ListError, ListErrorKind};

/// In-memory file lister.
///
/// Returns the configured paths verbatim, in insertion order, regardless of
/// the requested pattern. Requested patterns are recorded for assertions.
#[derive(Debug, Default)]
pub(crate) struct MockLister {
    files: Vec<String>,
    error: Option<ListErrorKind>,
    patterns: RwLock<Vec<String>>,
}

impl MockLister {
    /// Create a lister with no files.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append files to the listing.
    #[must_use]
    pub(crate) fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Make every `list` call fail with the given kind.
    #[must_use]
    pub(crate) fn with_error(mut self, kind: ListErrorKind) -> Self {
        self.error = Some(kind);
        self
    }

    /// Patterns passed to `list`, in call order.
    #[must_use]
    pub(crate) fn requested_patterns(&self) -> Vec<String> {
        self.patterns.read().unwrap().clone()
    }
}

impl FileLister for MockLister {
    fn list(&self, pattern: &str) -> Result<Vec<String>, ListError> {
        self.patterns.write().unwrap().push(pattern.to_owned());
        match self.error {
            Some(kind) => Err(ListError::new(kind).with_path("mock")),
            None => Ok(self.files.clone()),
        }
    }
}
