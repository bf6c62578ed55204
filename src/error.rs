//! Error types for phrasedeck.

use std::path::PathBuf;

/// Result type alias for phrasedeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for phrasedeck.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // Input errors
    /// An input file given on the command line does not exist.
    #[error("{kind} file not found: {path}")]
    InputNotFound {
        /// What the file was supposed to be ("JSON", "audio").
        kind: &'static str,
        /// Path that was given.
        path: PathBuf,
    },

    /// Failed to read a JSON document.
    #[error("failed to read JSON file '{path}'")]
    JsonRead {
        /// Path to the JSON file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON document.
    #[error("failed to parse JSON file '{path}'")]
    JsonParse {
        /// Path to the JSON file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A segment that carries text has no start or end time.
    #[error("segment {index} has text but no '{field}' time")]
    MissingSegmentField {
        /// 1-based position of the segment in the input document.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A canonical segment ends before it starts.
    #[error("segment {index}: end time ({end}) is before start time ({start})")]
    InvalidTimeRange {
        /// 1-based position of the segment in the input document.
        index: usize,
        /// Start time in seconds.
        start: f64,
        /// End time in seconds.
        end: f64,
    },

    // Transcoder errors
    /// The audio transcoder binary could not be started.
    #[error("failed to run '{program}' (is it installed and on PATH?)")]
    TranscoderSpawn {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The audio transcoder exited unsuccessfully.
    #[error("{operation} of '{path}' failed ({status}): {stderr}")]
    TranscoderFailed {
        /// Pipeline stage that failed ("slice", "silence trim").
        operation: &'static str,
        /// File the stage was producing.
        path: PathBuf,
        /// Exit status as reported by the OS.
        status: String,
        /// Tail of the transcoder's stderr.
        stderr: String,
    },

    // Output errors
    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove a stale clip directory.
    #[error("failed to clean output directory '{path}'")]
    OutputDirCleanFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete a temporary slice.
    #[error("failed to remove temporary clip '{path}'")]
    TempCleanupFailed {
        /// Path to the temporary file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the flashcard import file.
    #[error("failed to write import file '{path}'")]
    TsvWriteFailed {
        /// Path to the TSV file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a JSON output file.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a JSON document.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
