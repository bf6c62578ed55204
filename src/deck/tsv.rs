//! Tab-separated import file writing.
//!
//! The format is the plain two-column text Anki imports: `front<TAB>back`
//! per line, LF separated, no header and no trailing newline. Field text is
//! not escaped, so a tab or newline inside a phrase breaks the row.

use std::path::Path;

use super::ImportRecord;
use crate::error::{Error, Result};

/// Render records as import file contents.
pub fn render_tsv(records: &[ImportRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}\t{}", r.front, r.back))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write records to `path`, replacing any existing file.
pub fn write_tsv(records: &[ImportRecord], path: &Path) -> Result<()> {
    std::fs::write(path, render_tsv(records)).map_err(|e| Error::TsvWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
