//! Path helpers shared by the entry filter and settings validation.

use std::{
    collections::BTreeSet,
    path::{Component, Path},
};

/// Extension of the file name including its leading dot, taken from the final `.`.
///
/// `main.go` yields `.go`, `archive.tar.gz` yields `.gz` and a dot file such as
/// `.c` yields `.c`. Names without a dot, and names that are not valid UTF-8,
/// have no extension.
pub fn file_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|idx| &name[idx..])
}

/// Whether any directory component of `path` equals one of `names`.
///
/// Only whole components count; the file name itself is never compared.
pub fn has_excluded_component(path: &Path, names: &BTreeSet<String>) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    parent.components().any(|component| match component {
        Component::Normal(segment) => segment.to_str().is_some_and(|s| names.contains(s)),
        _ => false,
    })
}

/// Normalize a user supplied extension to the `.ext` form.
///
/// Returns `None` for blank input or input that still contains a dot or a
/// path separator after the optional leading dot is removed.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() || bare.contains(|c: char| matches!(c, '.' | '/' | '\\')) {
        return None;
    }
    Some(format!(".{bare}"))
}
