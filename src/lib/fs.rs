//! Filesystem access for the checker: deterministic directory walks and candidate opens.

use std::{fs::File, io::BufReader, path::Path};

use walkdir::{DirEntry, WalkDir};

use crate::lib::errors::CheckError;

/// Walk every entry below `root`, the root itself included, in file-name order.
///
/// Symlinks, a symlinked root included, are reported as entries but never
/// followed. The first walk error is
/// yielded as `CheckError::Traversal`; callers stop at it.
pub fn walk_entries(root: &Path) -> impl Iterator<Item = Result<DirEntry, CheckError>> + '_ {
    WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| {
            entry.map_err(|source| CheckError::Traversal {
                root: root.to_path_buf(),
                source,
            })
        })
}

/// Open a candidate file for line-oriented reading.
///
/// The handle closes when the returned reader is dropped.
pub fn open_candidate(path: &Path) -> Result<BufReader<File>, CheckError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CheckError::Open {
            path: path.to_path_buf(),
            source,
        })
}
