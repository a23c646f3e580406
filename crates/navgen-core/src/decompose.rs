//! Filename decomposition.
//!
//! Source files follow the `<name>.<type>.<suffix>` convention. Decomposition
//! strips the structural suffix from the basename and splits the remainder
//! into a name and a type code at the last dot.

/// Type code assigned to files without a recognizable type segment.
pub const UNKNOWN_TYPE: &str = "unknown";

/// A discovered file broken into its type code and display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecomposedEntry {
    /// Type code (e.g., "intf"), or [`UNKNOWN_TYPE`].
    pub type_code: String,
    /// Entity name (e.g., "`zcl_foo`").
    pub name: String,
    /// Path as delivered by the file lister.
    pub file_path: String,
}

/// Decompose a file path into type code and name.
///
/// Never fails. The last dot that leaves both sides non-empty is the boundary,
/// so `foo.bar.baz` yields name `foo.bar` and type `baz`. Without such a dot
/// the type is [`UNKNOWN_TYPE`] and the name is the whole stripped basename.
///
/// # Arguments
///
/// * `file_path` - Path relative to the discovery root, `/`-separated
/// * `suffix` - Structural suffix without the leading dot (e.g., "abap")
#[must_use]
pub fn decompose(file_path: &str, suffix: &str) -> DecomposedEntry {
    let basename = file_path.rsplit('/').next().unwrap_or(file_path);
    let stem = strip_suffix(basename, suffix);

    let (name, type_code) = match split_last_dot(stem) {
        Some((name, type_code)) => (name, type_code),
        None if stem.is_empty() => (UNKNOWN_TYPE, UNKNOWN_TYPE),
        None => (stem, UNKNOWN_TYPE),
    };

    DecomposedEntry {
        type_code: type_code.to_owned(),
        name: name.to_owned(),
        file_path: file_path.to_owned(),
    }
}

/// Remove `.<suffix>` from the end of `basename`, once.
///
/// A basename that is nothing but the suffix (e.g., `.abap`) is kept whole,
/// the same way [`std::path::Path::file_stem`] treats dotfiles.
fn strip_suffix<'a>(basename: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return basename;
    }
    basename
        .strip_suffix(suffix)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(basename)
}

/// Split at the rightmost dot with non-empty text on both sides.
fn split_last_dot(stem: &str) -> Option<(&str, &str)> {
    stem.rmatch_indices('.')
        .map(|(idx, _)| (&stem[..idx], &stem[idx + 1..]))
        .find(|(name, type_code)| !name.is_empty() && !type_code.is_empty())
}
