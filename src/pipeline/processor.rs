//! Phrase list processing: one clip and one flashcard per complete segment.

use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::clipper::{AudioTranscoder, ClipExtractor};
use crate::deck::{ImportRecord, derive_filename, is_scratch_name};
use crate::error::Result;
use crate::output::progress::inc_progress;
use crate::pipeline::UnitLayout;
use crate::segments::CanonicalSegment;

/// A clip written for one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedClip {
    /// 1-based position of the segment in the phrase list.
    pub segment_index: usize,
    /// Segment start in seconds.
    pub start: f64,
    /// Segment end in seconds.
    pub end: f64,
    /// Clip filename as referenced from the import file.
    pub filename: String,
    /// Full path of the clip.
    pub path: PathBuf,
}

/// Result of processing a phrase list.
#[derive(Debug)]
pub struct ProcessResult {
    /// Flashcards in segment order.
    pub records: Vec<ImportRecord>,
    /// Clips in segment order, one per record.
    pub clips: Vec<ProcessedClip>,
    /// Segments skipped because a language text was empty.
    pub skipped: usize,
    /// Wall time spent in seconds.
    pub duration_secs: f64,
}

/// Cut a clip and build a flashcard for every segment with both texts.
///
/// Segments run strictly in order. The first extraction error aborts the
/// run; clips written before it stay on disk. Segments whose texts derive
/// the same filename overwrite each other's clip, and both keep their
/// flashcard.
pub fn process_segments<T: AudioTranscoder>(
    segments: &[CanonicalSegment],
    source_audio: &Path,
    layout: &UnitLayout,
    extractor: &ClipExtractor<T>,
    extension: &str,
    progress: Option<&ProgressBar>,
) -> Result<ProcessResult> {
    let started = Instant::now();

    let mut records = Vec::new();
    let mut clips: Vec<ProcessedClip> = Vec::new();
    let mut skipped = 0;

    for (i, segment) in segments.iter().enumerate() {
        let index = i + 1;

        let Some((source_text, target_text)) = segment.bilingual_text() else {
            debug!("Skipping segment {index}: missing source or target text");
            skipped += 1;
            inc_progress(progress);
            continue;
        };

        let filename = derive_filename(target_text, extension);
        let output = layout.clip_dir.join(&filename);
        let scratch = layout.scratch_path(index, extension);

        if is_scratch_name(&filename) {
            warn!(
                "Segment {index}: clip name {filename} clashes with temporary slice names; the clip may be lost"
            );
        }

        if let Some(prev) = clips.iter().find(|c| c.filename == filename) {
            debug!(
                "Segment {index} reuses clip name {filename} from segment {}; overwriting",
                prev.segment_index
            );
        }

        extractor.extract_clip(source_audio, segment.start, segment.end, &scratch, &output)?;
        debug!(
            "Segment {index}: {:.2}s-{:.2}s -> {filename}",
            segment.start, segment.end
        );

        records.push(ImportRecord::new(source_text, target_text, &filename));
        clips.push(ProcessedClip {
            segment_index: index,
            start: segment.start,
            end: segment.end,
            filename,
            path: output,
        });
        inc_progress(progress);
    }

    let duration_secs = started.elapsed().as_secs_f64();
    info!(
        "Processed {} segments in {duration_secs:.1}s ({} clips, {skipped} skipped)",
        segments.len(),
        clips.len()
    );

    Ok(ProcessResult {
        records,
        clips,
        skipped,
        duration_secs,
    })
}
