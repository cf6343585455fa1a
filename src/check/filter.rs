//! Per-entry candidacy decision.
use std::{fs::FileType, path::Path};

use super::settings::CheckSettings;
use crate::lib::paths::{file_extension, has_excluded_component};

/// Outcome of filtering one walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDecision {
    /// Regular file with an allowed extension outside excluded directories.
    Candidate,
    NotRegular,
    ExcludedDir,
    ExtensionNotAllowed,
}

impl EntryDecision {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntryDecision::Candidate => "candidate",
            EntryDecision::NotRegular => "not_regular",
            EntryDecision::ExcludedDir => "excluded_dir",
            EntryDecision::ExtensionNotAllowed => "extension_not_allowed",
        }
    }
}

/// Classify an entry. Checks run in order: file type, excluded directory, extension.
///
/// `file_type` must describe the entry itself, not a symlink target.
pub fn classify(settings: &CheckSettings, path: &Path, file_type: FileType) -> EntryDecision {
    if !file_type.is_file() {
        return EntryDecision::NotRegular;
    }
    if has_excluded_component(path, &settings.excluded_dirs) {
        return EntryDecision::ExcludedDir;
    }
    match file_extension(path) {
        Some(ext) if settings.allows_extension(ext) => EntryDecision::Candidate,
        _ => EntryDecision::ExtensionNotAllowed,
    }
}
