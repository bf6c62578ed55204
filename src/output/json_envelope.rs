//! JSON envelope types for CLI output.
//!
//! With `--output-mode json` every command prints exactly one envelope on
//! stdout, so phrasedeck can be driven from scripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Envelope format version.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping a command's outcome.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct JsonEnvelope<T> {
    /// Envelope format version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Command finished successfully.
    Result,
    /// Command failed.
    Error,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Transcript reduced to a phrase list.
    Minify,
    /// Clips and import file generated.
    Build,
    /// Configuration file path or contents.
    Config,
}

/// Error payload for error events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable error message including its causes.
    pub message: String,
}

/// Payload for the `minify` result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifyPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Transcript that was read.
    pub input: PathBuf,
    /// Phrase list that was written.
    pub output: PathBuf,
    /// Segments kept.
    pub kept_segments: usize,
    /// Segments dropped for lack of text.
    pub dropped_segments: usize,
}

/// Payload for the `build` result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Source recording.
    pub source_audio: PathBuf,
    /// Directory the clips were written to.
    pub clip_dir: PathBuf,
    /// Flashcard import file.
    pub tsv_path: PathBuf,
    /// Number of clips written.
    pub total_clips: usize,
    /// Segments skipped because a language text was missing.
    pub skipped_segments: usize,
    /// Written clips in segment order.
    pub clips: Vec<BuildClipEntry>,
}

/// A single generated clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildClipEntry {
    /// 1-based position of the segment in the phrase list.
    pub segment_index: usize,
    /// Start time in seconds.
    pub start_time: f64,
    /// End time in seconds.
    pub end_time: f64,
    /// Clip filename referenced from the import file.
    pub filename: String,
}

/// Payload for the `config` subcommands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigPayload {
    /// Result type discriminator.
    pub result_type: ResultType,
    /// Configuration file path.
    pub path: PathBuf,
    /// Effective configuration, omitted for `config path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<crate::config::Config>,
    /// For `config init`: whether the file was written (false if it existed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
}
