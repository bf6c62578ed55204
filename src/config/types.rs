//! Configuration type definitions.

use crate::constants::{
    DEFAULT_AUDIO_SUBDIR, DEFAULT_FALLBACK_EXTENSION, DEFAULT_FFMPEG, DEFAULT_SILENCE_PERIODS,
    DEFAULT_SILENCE_THRESHOLD_DB,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Silence trimming settings.
    #[serde(default)]
    pub trim: TrimConfig,

    /// External transcoder settings.
    #[serde(default)]
    pub transcoder: TranscoderConfig,

    /// Output layout settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Silence trimming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Peak threshold in dBFS below which audio counts as silence.
    pub threshold_db: f64,

    /// Silent periods removed at each edge.
    pub periods: u32,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            threshold_db: DEFAULT_SILENCE_THRESHOLD_DB,
            periods: DEFAULT_SILENCE_PERIODS,
        }
    }
}

/// External transcoder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscoderConfig {
    /// Path or name of the ffmpeg binary.
    pub ffmpeg: PathBuf,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from(DEFAULT_FFMPEG),
        }
    }
}

/// Output layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Subdirectory of the unit directory holding the clips.
    pub audio_subdir: String,

    /// Clip extension used when the source audio has none.
    pub fallback_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            audio_subdir: DEFAULT_AUDIO_SUBDIR.to_string(),
            fallback_extension: DEFAULT_FALLBACK_EXTENSION.to_string(),
        }
    }
}

/// How command results are reported on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain text for people.
    #[default]
    Human,
    /// A single JSON envelope per command.
    Json,
}

impl OutputMode {
    /// Whether results are emitted as machine-readable JSON.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output mode: {other}")),
        }
    }
}
