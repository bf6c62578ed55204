//! Output layout for one recording ("unit").
//!
//! ```text
//! <base>/<audio stem>/                 unit directory
//! <base>/<audio stem>/<pairs stem>.tsv import file
//! <base>/<audio stem>/<audio_subdir>/  clips, recreated on every run
//! ```

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::filename::{TEMP_PREFIX, TSV_EXTENSION};
use crate::error::{Error, Result};

/// Where a build writes its artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLayout {
    /// Directory named after the recording.
    pub unit_dir: PathBuf,
    /// Directory receiving the clips.
    pub clip_dir: PathBuf,
    /// Flashcard import file.
    pub tsv_path: PathBuf,
}

impl UnitLayout {
    /// Lay out outputs for `audio` and `pairs` under `base`.
    pub fn new(base: &Path, audio: &Path, pairs: &Path, audio_subdir: &str) -> Self {
        let unit_dir = base.join(&*unit_name(audio));
        let clip_dir = unit_dir.join(audio_subdir);

        // Only the final extension is replaced: "Unit 01.min.json" -> "Unit 01.min.tsv"
        let mut tsv_name = pairs
            .file_stem()
            .map_or_else(|| OsString::from("phrases"), ToOwned::to_owned);
        tsv_name.push(".");
        tsv_name.push(TSV_EXTENSION);
        let tsv_path = unit_dir.join(tsv_name);

        Self {
            unit_dir,
            clip_dir,
            tsv_path,
        }
    }

    /// Create the unit directory and replace the clip directory with an
    /// empty one.
    ///
    /// Not safe against a second build writing the same unit concurrently.
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.unit_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.unit_dir.clone(),
            source: e,
        })?;

        if self.clip_dir.exists() {
            info!("Cleaning existing clip directory: {}", self.clip_dir.display());
            std::fs::remove_dir_all(&self.clip_dir).map_err(|e| Error::OutputDirCleanFailed {
                path: self.clip_dir.clone(),
                source: e,
            })?;
        }

        std::fs::create_dir_all(&self.clip_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.clip_dir.clone(),
            source: e,
        })
    }

    /// Scratch path for the untrimmed slice of the `index`-th segment.
    pub fn scratch_path(&self, index: usize, extension: &str) -> PathBuf {
        self.clip_dir
            .join(format!("{TEMP_PREFIX}{index}.{extension}"))
    }
}

/// Recording name without its extension, e.g. `Norwegian I - Unit 01`.
pub fn unit_name(audio: &Path) -> Cow<'_, str> {
    audio
        .file_stem()
        .map_or(Cow::Borrowed("unit"), |s| s.to_string_lossy())
}
