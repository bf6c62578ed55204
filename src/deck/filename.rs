//! Clip filename derivation.
//!
//! Clips are named after the phrase they contain so the media folder stays
//! browsable. Names are not unique: identical phrases map to the same file.

use std::path::Path;

use crate::constants::filename::{ILLEGAL_CHARS, PLACEHOLDER, TEMP_PREFIX};
use crate::text::{is_whitespace, trim};

/// Derive a clip filename from phrase text.
///
/// Question marks and characters rejected by common filesystems are removed,
/// each run of whitespace becomes a single `_`, and an empty result falls
/// back to `phrase`. The extension is appended without its dot.
///
/// Total and deterministic: every input yields a non-empty name without
/// path separators.
pub fn derive_filename(text: &str, extension: &str) -> String {
    let mut stem = String::with_capacity(text.len());
    let mut in_whitespace = false;

    // Removal happens before whitespace collapsing, so "a ? b" becomes "a_b"
    let kept = trim(text)
        .chars()
        .filter(|c| *c != '?' && !ILLEGAL_CHARS.contains(c));

    for c in kept {
        if is_whitespace(c) {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }

    if stem.is_empty() {
        stem.push_str(PLACEHOLDER);
    }

    format!("{stem}.{extension}")
}

/// Whether a derived clip name falls in the scratch-file namespace.
///
/// Such a clip can be the scratch slice of its own or a later segment, and
/// is then overwritten or deleted during extraction.
pub fn is_scratch_name(filename: &str) -> bool {
    filename.starts_with(TEMP_PREFIX)
}

/// Container extension for clips cut from `source`.
///
/// Slices are stream copies, so the clip container has to match the
/// source's. Falls back to `fallback` when the source has no usable
/// extension.
pub fn clip_extension(source: &Path, fallback: &str) -> String {
    source
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map_or_else(|| fallback.to_string(), str::to_lowercase)
}
