//! Flashcard import records.

/// One flashcard: source text on the front, target text plus audio on the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// Source-language text.
    pub front: String,
    /// Target-language text followed by the sound reference.
    pub back: String,
}

impl ImportRecord {
    /// Build the record for a phrase whose clip was written as `filename`.
    pub fn new(source_text: &str, target_text: &str, filename: &str) -> Self {
        Self {
            front: source_text.to_string(),
            back: format!("{target_text} {}", sound_tag(filename)),
        }
    }
}

/// Playback reference understood by Anki: `[sound:<filename>]`.
pub fn sound_tag(filename: &str) -> String {
    format!("[sound:{filename}]")
}
