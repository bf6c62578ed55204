//! Reading and writing transcript and phrase-list JSON.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::{CanonicalDocument, RawTranscript};
use crate::constants::filename::MINIFIED_EXTENSION;
use crate::error::{Error, Result};

/// Read a JSON document of type `T`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::JsonRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| Error::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a transcriber output document.
pub fn load_raw_transcript(path: &Path) -> Result<RawTranscript> {
    read_json(path)
}

/// Load a phrase list and check every segment's time range.
///
/// # Errors
///
/// Besides read and parse failures, returns [`Error::InvalidTimeRange`] for
/// the first segment whose end precedes its start.
pub fn load_canonical(path: &Path) -> Result<CanonicalDocument> {
    let document: CanonicalDocument = read_json(path)?;

    for (i, segment) in document.segments.iter().enumerate() {
        if segment.end < segment.start {
            return Err(Error::InvalidTimeRange {
                index: i + 1,
                start: segment.start,
                end: segment.end,
            });
        }
    }

    Ok(document)
}

/// Write a phrase list as two-space indented JSON, overwriting `path`.
///
/// Non-ASCII text is written as-is.
pub fn save_canonical(document: &CanonicalDocument, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(document).map_err(|e| Error::JsonSerialize { source: e })?;

    std::fs::write(path, json).map_err(|e| Error::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Path of the phrase list produced from a transcript.
///
/// `Unit 01.json` becomes `Unit 01.min.json`; a path without an extension
/// gets `.min.json` appended.
pub fn minified_path(transcript: &Path) -> PathBuf {
    transcript.with_extension(MINIFIED_EXTENSION)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::segments::CanonicalSegment;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_minified_path() {
        assert_eq!(
            minified_path(Path::new("Norwegian I - Unit 01.json")),
            PathBuf::from("Norwegian I - Unit 01.min.json")
        );
        assert_eq!(
            minified_path(Path::new("dir/unit.v2.json")),
            PathBuf::from("dir/unit.v2.min.json")
        );
        assert_eq!(
            minified_path(Path::new("transcript")),
            PathBuf::from("transcript.min.json")
        );
    }

    #[test]
    fn test_load_raw_transcript_without_segments_key() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"language": "no"}}"#).unwrap();

        let transcript = load_raw_transcript(file.path()).unwrap();
        assert!(transcript.segments.is_empty());
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"segments": [ "#).unwrap();

        let result = load_raw_transcript(file.path());
        assert!(matches!(result, Err(Error::JsonParse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_canonical(Path::new("/nonexistent/pairs.min.json"));
        assert!(matches!(result, Err(Error::JsonRead { .. })));
    }

    #[test]
    fn test_load_canonical_rejects_reversed_range() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"segments": [
                {{"start": 0.0, "end": 1.0, "english": "a", "norwegian": "b", "notes": ""}},
                {{"start": 5.0, "end": 4.0, "english": "c", "norwegian": "d", "notes": ""}}
            ]}}"#
        )
        .unwrap();

        let result = load_canonical(file.path());
        assert!(matches!(
            result,
            Err(Error::InvalidTimeRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_load_canonical_accepts_zero_length() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"segments": [{{"start": 3.0, "end": 3.0, "english": "a", "norwegian": "b"}}]}}"#
        )
        .unwrap();

        let doc = load_canonical(file.path()).unwrap();
        assert_eq!(doc.segments[0].duration(), 0.0);
    }

    #[test]
    fn test_save_canonical_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.min.json");
        let doc = CanonicalDocument {
            segments: vec![CanonicalSegment::from_transcript(1.0, 2.5, "Hvordan går det?")],
        };

        save_canonical(&doc, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        assert!(written.starts_with("{\n  \"segments\": [\n    {\n"));
        assert!(written.contains("\"norwegian\": \"Hvordan går det?\""));
        assert!(!written.ends_with('\n'));
        assert_eq!(load_canonical(&path).unwrap(), doc);
    }
}
