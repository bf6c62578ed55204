//! Shared test helpers.

#![allow(dead_code, clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use phrasedeck::Error;
use phrasedeck::clipper::{AudioTranscoder, TrimSettings};
use phrasedeck::segments::CanonicalSegment;

/// A transcoder invocation recorded by [`MockTranscoder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// A slice of the source.
    Slice {
        /// Start in seconds.
        start: f64,
        /// End in seconds.
        end: f64,
        /// Scratch file written.
        output: PathBuf,
    },
    /// A silence trim.
    Trim {
        /// Scratch file read.
        input: PathBuf,
        /// Threshold used.
        threshold_db: f64,
        /// Clip written.
        output: PathBuf,
    },
}

/// Writes text files describing the requested range instead of audio.
#[derive(Default)]
pub struct MockTranscoder {
    /// Every call in order.
    pub calls: RefCell<Vec<Call>>,
    /// Fail the n-th slice (1-based).
    pub fail_on_slice: Option<usize>,
    slices: Cell<usize>,
}

impl MockTranscoder {
    /// Mock that fails its n-th slice.
    pub fn failing_on_slice(n: usize) -> Self {
        Self {
            fail_on_slice: Some(n),
            ..Self::default()
        }
    }

    /// Number of slice calls made.
    pub fn slice_count(&self) -> usize {
        self.slices.get()
    }
}

impl AudioTranscoder for MockTranscoder {
    fn slice(&self, source: &Path, start: f64, end: f64, output: &Path) -> phrasedeck::Result<()> {
        let n = self.slices.get() + 1;
        self.slices.set(n);
        if self.fail_on_slice == Some(n) {
            return Err(Error::TranscoderFailed {
                operation: "slice",
                path: output.to_path_buf(),
                status: "exit status: 1".to_string(),
                stderr: "Invalid data found when processing input".to_string(),
            });
        }

        std::fs::write(
            output,
            format!("{} [{start}, {end})", source.display()),
        )?;
        self.calls.borrow_mut().push(Call::Slice {
            start,
            end,
            output: output.to_path_buf(),
        });
        Ok(())
    }

    fn trim_silence(
        &self,
        input: &Path,
        settings: &TrimSettings,
        output: &Path,
    ) -> phrasedeck::Result<()> {
        let sliced = std::fs::read_to_string(input)?;
        std::fs::write(output, format!("trimmed {sliced}"))?;
        self.calls.borrow_mut().push(Call::Trim {
            input: input.to_path_buf(),
            threshold_db: settings.threshold_db,
            output: output.to_path_buf(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Default trim settings.
pub fn trim() -> TrimSettings {
    TrimSettings {
        threshold_db: -110.0,
        periods: 1,
    }
}

/// A phrase with both language texts.
pub fn phrase(start: f64, end: f64, english: &str, norwegian: &str) -> CanonicalSegment {
    CanonicalSegment {
        start,
        end,
        source_text: english.to_string(),
        target_text: norwegian.to_string(),
        notes: String::new(),
    }
}

/// Sorted file names in `dir`.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
