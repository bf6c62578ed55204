//! Minify command execution.

use tracing::info;

use crate::Error;
use crate::cli::MinifyArgs;
use crate::config::OutputMode;
use crate::output::{MinifyPayload, ResultType, emit_json_result};

use super::{CanonicalDocument, load_raw_transcript, minified_path, normalize, save_canonical};

/// Execute the minify command.
///
/// Writes `<name>.min.json` next to the transcript. The English column is
/// left empty for the translator to fill in before `build`.
///
/// # Errors
///
/// Returns an error if the transcript is missing or malformed, or the
/// phrase list cannot be written.
pub fn execute(args: &MinifyArgs, output_mode: OutputMode) -> Result<(), Error> {
    if !args.transcript.exists() {
        return Err(Error::InputNotFound {
            kind: "JSON",
            path: args.transcript.clone(),
        });
    }

    let transcript = load_raw_transcript(&args.transcript)?;
    let segments = normalize(&transcript.segments)?;
    let dropped = transcript.segments.len() - segments.len();
    info!(
        "Kept {} of {} segments from {}",
        segments.len(),
        transcript.segments.len(),
        args.transcript.display()
    );

    let output = minified_path(&args.transcript);
    let kept = segments.len();
    save_canonical(&CanonicalDocument { segments }, &output)?;

    if output_mode.is_structured() {
        emit_json_result(&MinifyPayload {
            result_type: ResultType::Minify,
            input: args.transcript.clone(),
            output,
            kept_segments: kept,
            dropped_segments: dropped,
        });
        return Ok(());
    }

    println!("Wrote simplified file: {}", output.display());
    Ok(())
}
