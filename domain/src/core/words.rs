//! Word counting for generated text.
//!
//! A "word" is a whitespace-delimited token. This is the single definition
//! used everywhere: chunk accounting, progress counters, and reply sizing
//! all agree because they all call [`count_words`] on the text that was
//! actually emitted, never a private tally.

/// Count whitespace-delimited words in `text`.
///
/// Leading/trailing whitespace is ignored; an empty or blank string counts
/// as zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
