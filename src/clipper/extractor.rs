//! Two-stage clip extraction: exact slice, then silence trim.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use super::{AudioTranscoder, TrimSettings};
use crate::error::{Error, Result};

/// Cuts phrase clips out of a recording.
///
/// The slice is a stream copy into a scratch file so the silence detector
/// sees the original samples; the trim stage then writes the final clip.
pub struct ClipExtractor<T> {
    transcoder: T,
    trim: TrimSettings,
}

impl<T: AudioTranscoder> ClipExtractor<T> {
    /// Create an extractor using `transcoder` with the given trim settings.
    pub fn new(transcoder: T, trim: TrimSettings) -> Self {
        Self { transcoder, trim }
    }

    /// The underlying transcoder.
    pub fn transcoder(&self) -> &T {
        &self.transcoder
    }

    /// Trim settings applied to every clip.
    pub fn trim_settings(&self) -> &TrimSettings {
        &self.trim
    }

    /// Extract `[start, end)` of `source` into `output`, trimmed.
    ///
    /// `scratch` receives the untrimmed slice and is removed afterwards,
    /// whether or not trimming succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first transcoder failure. If both stages succeed, a
    /// failure to remove `scratch` is returned as
    /// [`Error::TempCleanupFailed`]; a scratch file that is already gone is
    /// fine.
    pub fn extract_clip(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        scratch: &Path,
        output: &Path,
    ) -> Result<()> {
        debug!(
            "Slicing {:.3}s-{:.3}s of {} via {}",
            start,
            end,
            source.display(),
            self.transcoder.name()
        );

        let stages = self
            .transcoder
            .slice(source, start, end, scratch)
            .and_then(|()| self.transcoder.trim_silence(scratch, &self.trim, output));

        let cleanup = remove_scratch(scratch);

        match (stages, cleanup) {
            (Err(stage_err), Err(cleanup_err)) => {
                warn!("{cleanup_err}");
                Err(stage_err)
            }
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Ok(()), Ok(())) => Ok(()),
        }
    }
}

/// Delete a scratch slice, treating an absent file as success.
fn remove_scratch(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::TempCleanupFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Writes marker files instead of audio and records the stages it ran.
    #[derive(Default)]
    struct FakeTranscoder {
        fail_trim: bool,
        consume_scratch: bool,
        stages: RefCell<Vec<&'static str>>,
    }

    impl AudioTranscoder for FakeTranscoder {
        fn slice(&self, _source: &Path, start: f64, end: f64, output: &Path) -> Result<()> {
            self.stages.borrow_mut().push("slice");
            std::fs::write(output, format!("{start}-{end}"))?;
            Ok(())
        }

        fn trim_silence(&self, input: &Path, _settings: &TrimSettings, output: &Path) -> Result<()> {
            self.stages.borrow_mut().push("trim");
            if self.fail_trim {
                return Err(Error::TranscoderFailed {
                    operation: "silence trim",
                    path: output.to_path_buf(),
                    status: "exit status: 1".to_string(),
                    stderr: String::new(),
                });
            }
            std::fs::copy(input, output)?;
            if self.consume_scratch {
                std::fs::remove_file(input)?;
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn settings() -> TrimSettings {
        TrimSettings {
            threshold_db: -110.0,
            periods: 1,
        }
    }

    #[test]
    fn test_extract_runs_both_stages_and_removes_scratch() {
        let dir = TempDir::new().unwrap();
        let scratch = dir.path().join("__tmp_1.mp3");
        let output = dir.path().join("Hei.mp3");
        let extractor = ClipExtractor::new(FakeTranscoder::default(), settings());

        extractor
            .extract_clip(Path::new("src.mp3"), 2.0, 5.0, &scratch, &output)
            .unwrap();

        assert_eq!(*extractor.transcoder().stages.borrow(), ["slice", "trim"]);
        assert!(!scratch.exists());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "2-5");
    }

    #[test]
    fn test_scratch_already_gone_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let scratch = dir.path().join("__tmp_1.mp3");
        let output = dir.path().join("Hei.mp3");
        let transcoder = FakeTranscoder {
            consume_scratch: true,
            ..FakeTranscoder::default()
        };
        let extractor = ClipExtractor::new(transcoder, settings());

        assert!(
            extractor
                .extract_clip(Path::new("src.mp3"), 0.0, 1.0, &scratch, &output)
                .is_ok()
        );
        assert!(output.exists());
    }

    #[test]
    fn test_trim_failure_propagates_and_scratch_removed() {
        let dir = TempDir::new().unwrap();
        let scratch = dir.path().join("__tmp_1.mp3");
        let output = dir.path().join("Hei.mp3");
        let transcoder = FakeTranscoder {
            fail_trim: true,
            ..FakeTranscoder::default()
        };
        let extractor = ClipExtractor::new(transcoder, settings());

        let result = extractor.extract_clip(Path::new("src.mp3"), 0.0, 1.0, &scratch, &output);

        assert!(matches!(result, Err(Error::TranscoderFailed { .. })));
        assert!(!scratch.exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_remove_scratch_on_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let result = remove_scratch(dir.path());
        assert!(matches!(result, Err(Error::TempCleanupFailed { .. })));
    }
}
