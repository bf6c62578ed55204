//! Phrase clip extraction.
//!
//! Clips are cut from the source recording by an external transcoder in two
//! stages: an exact stream-copy slice, then peak-based silence trimming at
//! both edges.

pub mod command;
mod extractor;
mod transcoder;

pub use extractor::ClipExtractor;
pub use transcoder::{AudioTranscoder, FfmpegTranscoder, TrimSettings};
