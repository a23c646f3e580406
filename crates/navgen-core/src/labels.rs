//! Type code to group label mapping.

use std::collections::HashMap;

/// Mapping from type codes to human-readable group labels.
///
/// Lookups for codes without an entry return the code itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    labels: HashMap<String, String>,
}

impl LabelDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with the labels shipped by default.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new().with_label("intf", "Interfaces")
    }

    /// Add or replace a label.
    #[must_use]
    pub fn with_label(mut self, type_code: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(type_code, label);
        self
    }

    /// Add or replace a label in place.
    pub fn insert(&mut self, type_code: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(type_code.into(), label.into());
    }

    /// Resolve the display label for a type code.
    #[must_use]
    pub fn resolve<'a>(&'a self, type_code: &'a str) -> &'a str {
        self.labels.get(type_code).map_or(type_code, String::as_str)
    }

    /// Number of explicit labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no labels are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K, V> Extend<(K, V)> for LabelDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (type_code, label) in iter {
            self.insert(type_code, label);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LabelDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}
