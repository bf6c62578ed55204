//! Transcript segments and phrase lists.
//!
//! A transcriber produces timed text in the target language. `minify`
//! reduces that to a phrase list whose `english` column a person fills in
//! by hand; `build` then consumes the enriched list.

pub mod command;
mod io;
mod normalizer;
mod types;

pub use io::{load_canonical, load_raw_transcript, minified_path, save_canonical};
pub use normalizer::normalize;
pub use types::{CanonicalDocument, CanonicalSegment, RawSegment, RawTranscript};
