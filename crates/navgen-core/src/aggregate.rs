//! Grouping of decomposed entries by type code.

use indexmap::IndexMap;

use crate::decompose::DecomposedEntry;

/// Names collected under one type code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Type code shared by every name in the group.
    pub type_code: String,
    /// Names in arrival order. Duplicates are kept.
    pub names: Vec<String>,
}

/// Group entries by type code.
///
/// Groups appear in the order their type code is first seen, and names keep
/// the order in which entries arrive. Nothing is sorted or deduplicated.
#[must_use]
pub fn aggregate<I>(entries: I) -> Vec<Group>
where
    I: IntoIterator<Item = DecomposedEntry>,
{
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for entry in entries {
        groups.entry(entry.type_code).or_default().push(entry.name);
    }

    groups
        .into_iter()
        .map(|(type_code, names)| Group { type_code, names })
        .collect()
}
