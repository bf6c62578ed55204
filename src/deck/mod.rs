//! Flashcard deck artifacts: clip names, import records and the TSV file.

mod filename;
mod record;
mod tsv;

pub use filename::{clip_extension, derive_filename, is_scratch_name};
pub use record::{ImportRecord, sound_tag};
pub use tsv::{render_tsv, write_tsv};
