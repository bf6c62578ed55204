//! Transcript and phrase-list record types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::text;

/// A segment as produced by the upstream transcriber.
///
/// Only the timing and text fields are read; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSegment {
    /// Start offset in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    /// End offset in seconds.
    #[serde(default)]
    pub end: Option<f64>,
    /// Recognized text.
    #[serde(default)]
    pub text: Option<String>,
}

/// A transcriber output document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTranscript {
    /// Segments in recording order.
    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

/// A phrase with timing and both language texts.
///
/// Serialized with the domain labels `english` (source language) and
/// `norwegian` (target language).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSegment {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds.
    pub end: f64,
    /// Source-language text, the flashcard front.
    #[serde(rename = "english", default, deserialize_with = "null_as_empty")]
    pub source_text: String,
    /// Target-language text, spoken in the recording.
    #[serde(rename = "norwegian", default, deserialize_with = "null_as_empty")]
    pub target_text: String,
    /// Free-form notes, carried through untouched.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

impl CanonicalSegment {
    /// Build a segment from transcribed target-language speech.
    ///
    /// The source text and notes are left for manual enrichment.
    pub fn from_transcript(start: f64, end: f64, target_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source_text: String::new(),
            target_text: target_text.into(),
            notes: String::new(),
        }
    }

    /// Trimmed `(source, target)` texts, if both are present.
    pub fn bilingual_text(&self) -> Option<(&str, &str)> {
        let source = text::trim(&self.source_text);
        let target = text::trim(&self.target_text);
        (!source.is_empty() && !target.is_empty()).then_some((source, target))
    }

    /// Length of the segment in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A phrase-list document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    /// Phrases in recording order.
    #[serde(default)]
    pub segments: Vec<CanonicalSegment>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
