//! Build command execution.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::Error;
use crate::cli::BuildArgs;
use crate::config::{Config, OutputMode, validate_config};
use crate::deck::{clip_extension, write_tsv};
use crate::output::progress::{create_segment_progress, finish_progress};
use crate::output::{BuildClipEntry, BuildPayload, ResultType, emit_json_result};
use crate::pipeline::{UnitLayout, process_segments, unit_name};
use crate::segments::load_canonical;

use super::{AudioTranscoder, ClipExtractor, FfmpegTranscoder, TrimSettings};

/// Execute the build command.
///
/// Inputs are validated and the transcoder probed before the output
/// directory is touched. The import file is only written once every
/// segment has been processed.
///
/// # Errors
///
/// Returns the first input, transcoder or filesystem error.
pub fn execute(
    args: &BuildArgs,
    config: &Config,
    output_mode: OutputMode,
    show_progress: bool,
) -> Result<(), Error> {
    ensure_exists(&args.pairs, "JSON")?;
    ensure_exists(&args.audio, "audio")?;

    let config = effective_config(args, config)?;
    let document = load_canonical(&args.pairs)?;
    info!(
        "Loaded {} segments from {}",
        document.segments.len(),
        args.pairs.display()
    );

    let transcoder = FfmpegTranscoder::new(config.transcoder.ffmpeg.clone());
    transcoder.ensure_available()?;
    let extractor = ClipExtractor::new(transcoder, TrimSettings::from(&config.trim));
    info!(
        "Trimming silence below {} dB",
        extractor.trim_settings().threshold_db
    );

    let base = args.output_dir.as_deref().unwrap_or_else(|| Path::new("."));
    let layout = UnitLayout::new(base, &args.audio, &args.pairs, &config.output.audio_subdir);
    layout.prepare()?;

    let extension = clip_extension(&args.audio, &config.output.fallback_extension);

    let pb = create_segment_progress(
        document.segments.len(),
        &unit_name(&args.audio),
        show_progress && !output_mode.is_structured(),
    );
    let result = process_segments(
        &document.segments,
        &args.audio,
        &layout,
        &extractor,
        &extension,
        pb.as_ref(),
    );
    finish_progress(pb, "done");
    let result = result?;

    write_tsv(&result.records, &layout.tsv_path)?;
    info!(
        "Wrote {} flashcards to {}",
        result.records.len(),
        layout.tsv_path.display()
    );

    if output_mode.is_structured() {
        let payload = BuildPayload {
            result_type: ResultType::Build,
            source_audio: args.audio.clone(),
            clip_dir: layout.clip_dir.clone(),
            tsv_path: layout.tsv_path.clone(),
            total_clips: result.clips.len(),
            skipped_segments: result.skipped,
            clips: result
                .clips
                .into_iter()
                .map(|clip| BuildClipEntry {
                    segment_index: clip.segment_index,
                    start_time: clip.start,
                    end_time: clip.end,
                    filename: clip.filename,
                })
                .collect(),
        };
        emit_json_result(&payload);
        return Ok(());
    }

    println!(
        "Created {} clips in: {}",
        result.clips.len(),
        layout.clip_dir.display()
    );
    println!("Import file written to: {}", layout.tsv_path.display());

    Ok(())
}

/// Overlay command-line overrides on the loaded config and validate.
fn effective_config(args: &BuildArgs, config: &Config) -> Result<Config, Error> {
    let mut config = config.clone();
    if let Some(threshold) = args.threshold {
        config.trim.threshold_db = threshold;
    }
    if let Some(ffmpeg) = &args.ffmpeg {
        config.transcoder.ffmpeg.clone_from(ffmpeg);
    }
    validate_config(&config)?;
    Ok(config)
}

fn ensure_exists(path: &Path, kind: &'static str) -> Result<(), Error> {
    if path.exists() {
        return Ok(());
    }
    Err(Error::InputNotFound {
        kind,
        path: PathBuf::from(path),
    })
}
