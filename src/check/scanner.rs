//! Bounded header scan over the leading lines of a file.
use std::{
    io::{self, BufRead, Read},
    path::Path,
};

use super::pattern::HeaderPattern;
use crate::lib::{errors::CheckError, fs::open_candidate};

/// Result of scanning one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    /// 1-based line number of the first match.
    Present { line: usize },
    /// No match; `examined` lines were read before the window or the input ran out.
    Missing { examined: usize },
}

impl HeaderStatus {
    pub const fn is_present(&self) -> bool {
        matches!(self, HeaderStatus::Present { .. })
    }
}

/// Scan the first `max_lines` lines of the file at `path`.
pub fn scan_file(
    path: &Path,
    pattern: &HeaderPattern,
    max_lines: usize,
) -> Result<HeaderStatus, CheckError> {
    let reader = open_candidate(path)?;
    scan_lines(reader, pattern, max_lines).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Longest line, excluding its newline, that is matched against the pattern.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Scan at most `max_lines` lines of `reader`, stopping at the first match.
///
/// A trailing `\r` is dropped before matching. Nothing past the window is read.
/// A line longer than `MAX_LINE_BYTES` ends the scan as `Missing`, so at most
/// `max_lines * (MAX_LINE_BYTES + 1)` bytes are consumed per file.
pub fn scan_lines<R: BufRead>(
    mut reader: R,
    pattern: &HeaderPattern,
    max_lines: usize,
) -> io::Result<HeaderStatus> {
    let mut examined = 0;
    let mut buf = Vec::new();
    while examined < max_lines {
        buf.clear();
        let read = reader
            .by_ref()
            .take(MAX_LINE_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        let line = match buf.strip_suffix(b"\n") {
            Some(line) => line,
            None if buf.len() > MAX_LINE_BYTES => break,
            None => &buf[..],
        };
        examined += 1;
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if pattern.is_match(line) {
            return Ok(HeaderStatus::Present { line: examined });
        }
    }
    Ok(HeaderStatus::Missing { examined })
}
