//! Whitespace handling shared by phrase normalization and clip naming.
//!
//! Transcribers and hand-edited phrase lists occasionally carry the ASCII
//! information separators (U+001C..=U+001F). They are treated as whitespace
//! alongside everything Unicode marks `White_Space`.

/// Whether `c` separates words in phrase text.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `text` without leading and trailing whitespace.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}
