//! Reduce a transcriber document to a phrase list.

use tracing::debug;

use super::{CanonicalSegment, RawSegment};
use crate::error::{Error, Result};
use crate::text::trim;

/// Keep the segments that carry text and convert them to phrase records.
///
/// Text is trimmed and becomes the target-language field. Timing is copied
/// as-is. Order is preserved and nothing is deduplicated.
///
/// # Errors
///
/// Returns [`Error::MissingSegmentField`] when a segment with text has no
/// start or end time. Segments without text are dropped before their timing
/// is looked at.
pub fn normalize(raw: &[RawSegment]) -> Result<Vec<CanonicalSegment>> {
    let mut segments = Vec::with_capacity(raw.len());

    for (i, segment) in raw.iter().enumerate() {
        let index = i + 1;
        let text = segment.text.as_deref().map_or("", trim);
        if text.is_empty() {
            debug!("Dropping segment {index}: no text");
            continue;
        }

        let start = segment.start.ok_or(Error::MissingSegmentField {
            index,
            field: "start",
        })?;
        let end = segment.end.ok_or(Error::MissingSegmentField {
            index,
            field: "end",
        })?;

        segments.push(CanonicalSegment::from_transcript(start, end, text));
    }

    Ok(segments)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn raw(start: f64, end: f64, text: &str) -> RawSegment {
        RawSegment {
            start: Some(start),
            end: Some(end),
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn test_single_segment_becomes_target_text() {
        let out = normalize(&[raw(1.0, 2.0, "Hei")]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, 1.0);
        assert_eq!(out[0].end, 2.0);
        assert_eq!(out[0].source_text, "");
        assert_eq!(out[0].target_text, "Hei");
        assert_eq!(out[0].notes, "");
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(normalize(&[raw(1.0, 2.0, "")]).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only_and_missing_text_dropped() {
        let segments = [
            raw(0.0, 1.0, "  \t\n"),
            RawSegment {
                start: Some(1.0),
                end: Some(2.0),
                text: None,
            },
            raw(2.0, 3.0, "  Takk  "),
        ];
        let out = normalize(&segments).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target_text, "Takk");
        assert_eq!(out[0].start, 2.0);
    }

    #[test]
    fn test_information_separators_trimmed_and_dropped() {
        let segments = [raw(0.0, 1.0, "\u{1f}\u{1c}"), raw(1.0, 2.0, "\u{1e}Hei\u{1f}")];
        let out = normalize(&segments).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target_text, "Hei");
    }

    #[test]
    fn test_order_preserved_and_duplicates_kept() {
        let segments = [raw(5.0, 6.0, "B"), raw(1.0, 2.0, "A"), raw(5.0, 6.0, "B")];
        let out = normalize(&segments).unwrap();
        let texts: Vec<_> = out.iter().map(|s| s.target_text.as_str()).collect();
        assert_eq!(texts, ["B", "A", "B"]);
    }

    #[test]
    fn test_timing_is_not_clamped() {
        let out = normalize(&[raw(-0.5, 9999.25, "x")]).unwrap();
        assert_eq!(out[0].start, -0.5);
        assert_eq!(out[0].end, 9999.25);
    }

    #[test]
    fn test_missing_start_is_fatal() {
        let segments = [
            raw(0.0, 1.0, "ok"),
            RawSegment {
                start: None,
                end: Some(2.0),
                text: Some("Hei".to_string()),
            },
        ];
        let result = normalize(&segments);
        assert!(matches!(
            result,
            Err(Error::MissingSegmentField {
                index: 2,
                field: "start"
            })
        ));
    }

    #[test]
    fn test_missing_end_is_fatal() {
        let segments = [RawSegment {
            start: Some(0.0),
            end: None,
            text: Some("Hei".to_string()),
        }];
        assert!(matches!(
            normalize(&segments),
            Err(Error::MissingSegmentField { field: "end", .. })
        ));
    }

    #[test]
    fn test_missing_timing_on_dropped_segment_is_ignored() {
        let segments = [RawSegment::default(), raw(0.0, 1.0, "Hei")];
        assert_eq!(normalize(&segments).unwrap().len(), 1);
    }
}
