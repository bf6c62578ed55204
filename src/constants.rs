//! Application-wide constants.
//!
//! Magic numbers and strings live here so the pipeline, CLI and config
//! agree on them.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "phrasedeck";

/// Default silence threshold in dBFS for edge trimming.
///
/// Less negative trims more aggressively, more negative trims less.
pub const DEFAULT_SILENCE_THRESHOLD_DB: f64 = -110.0;

/// Default number of silent periods removed at each edge.
pub const DEFAULT_SILENCE_PERIODS: u32 = 1;

/// Default ffmpeg binary, resolved through `PATH`.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Subdirectory of the unit directory that receives the clips.
pub const DEFAULT_AUDIO_SUBDIR: &str = "audio";

/// Clip extension used when the source audio has none.
pub const DEFAULT_FALLBACK_EXTENSION: &str = "mp3";

/// Filename constants.
pub mod filename {
    /// Stem substituted when the derived name would be empty.
    pub const PLACEHOLDER: &str = "phrase";

    /// Prefix of the per-segment temporary slice file.
    pub const TEMP_PREFIX: &str = "__tmp_";

    /// Extension that replaces the transcript's extension on `minify`.
    pub const MINIFIED_EXTENSION: &str = "min.json";

    /// Extension of the flashcard import file.
    pub const TSV_EXTENSION: &str = "tsv";

    /// Characters removed because common filesystems reject them.
    pub const ILLEGAL_CHARS: &[char] = &['"', '*', ':', '<', '>', '/', '\\', '|'];
}

/// Number of trailing stderr bytes kept in transcoder error messages.
pub const STDERR_TAIL_BYTES: usize = 2048;
