//! External audio transcoder abstraction.
//!
//! The pipeline needs two operations from an audio tool: a lossless time
//! range copy and peak-based edge silence removal. [`AudioTranscoder`] names
//! them so the pipeline can run against ffmpeg or a test double.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::config::TrimConfig;
use crate::constants::STDERR_TAIL_BYTES;
use crate::error::{Error, Result};

/// Silence trimming parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimSettings {
    /// Peak level in dBFS below which audio counts as silence.
    pub threshold_db: f64,
    /// Silent periods removed at each edge.
    pub periods: u32,
}

impl TrimSettings {
    /// ffmpeg `silenceremove` filter trimming both edges with peak detection.
    pub fn filter_graph(&self) -> String {
        let Self {
            threshold_db,
            periods,
        } = *self;
        format!(
            "silenceremove=start_periods={periods}:start_threshold={threshold_db}dB:\
             stop_periods={periods}:stop_threshold={threshold_db}dB:detection=peak"
        )
    }
}

impl From<&TrimConfig> for TrimSettings {
    fn from(config: &TrimConfig) -> Self {
        Self {
            threshold_db: config.threshold_db,
            periods: config.periods,
        }
    }
}

/// Audio operations the clip pipeline depends on.
///
/// Calls block until the work is complete. Implementations overwrite
/// existing output files.
pub trait AudioTranscoder {
    /// Copy `[start, end)` seconds of `source` to `output` without
    /// re-encoding.
    fn slice(&self, source: &Path, start: f64, end: f64, output: &Path) -> Result<()>;

    /// Remove leading and trailing silence from `input`, writing `output`.
    fn trim_silence(&self, input: &Path, settings: &TrimSettings, output: &Path) -> Result<()>;

    /// Check that the backing tool can be used.
    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }

    /// Backend name for logs.
    fn name(&self) -> &str;
}

/// [`AudioTranscoder`] backed by the ffmpeg command-line tool.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: PathBuf,
}

impl FfmpegTranscoder {
    /// Use the ffmpeg binary at `program` (a bare name is looked up on `PATH`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for a stream-copy slice.
    fn slice_args(source: &Path, start: f64, end: f64, output: &Path) -> Vec<OsString> {
        let mut args = Self::common_args();
        args.extend([
            "-ss".into(),
            start.to_string().into(),
            "-to".into(),
            end.to_string().into(),
            "-i".into(),
            source.as_os_str().to_owned(),
            "-acodec".into(),
            "copy".into(),
            output.as_os_str().to_owned(),
        ]);
        args
    }

    /// Arguments for edge silence removal.
    fn trim_args(input: &Path, settings: &TrimSettings, output: &Path) -> Vec<OsString> {
        let mut args = Self::common_args();
        args.extend([
            "-i".into(),
            input.as_os_str().to_owned(),
            "-af".into(),
            settings.filter_graph().into(),
            output.as_os_str().to_owned(),
        ]);
        args
    }

    fn common_args() -> Vec<OsString> {
        ["-hide_banner", "-nostdin", "-loglevel", "error", "-y"]
            .into_iter()
            .map(OsString::from)
            .collect()
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Run ffmpeg to completion, mapping spawn failures and non-zero exits.
    fn run(&self, operation: &'static str, output: &Path, args: &[OsString]) -> Result<()> {
        trace!(program = %self.program.display(), ?args, "Running {operation}");

        let result = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::TranscoderSpawn {
                program: self.program_name(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(Error::TranscoderFailed {
                operation,
                path: output.to_path_buf(),
                status: result.status.to_string(),
                stderr: stderr_tail(&result.stderr),
            });
        }

        Ok(())
    }
}

impl AudioTranscoder for FfmpegTranscoder {
    fn slice(&self, source: &Path, start: f64, end: f64, output: &Path) -> Result<()> {
        self.run("slice", output, &Self::slice_args(source, start, end, output))
    }

    fn trim_silence(&self, input: &Path, settings: &TrimSettings, output: &Path) -> Result<()> {
        self.run(
            "silence trim",
            output,
            &Self::trim_args(input, settings, output),
        )
    }

    fn ensure_available(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::TranscoderSpawn {
                program: self.program_name(),
                source: e,
            })?;

        if !status.success() {
            return Err(Error::TranscoderFailed {
                operation: "version check",
                path: self.program.clone(),
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        debug!("Using transcoder: {}", self.program.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "ffmpeg"
    }
}

/// Last [`STDERR_TAIL_BYTES`] of trimmed stderr, cut on a char boundary.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    if text.len() <= STDERR_TAIL_BYTES {
        return text.to_string();
    }

    let mut cut = text.len() - STDERR_TAIL_BYTES;
    while !text.is_char_boundary(cut) {
        cut += 1;
    }
    format!("...{}", &text[cut..])
}
