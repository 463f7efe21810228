//! Bulk reply composition — the non-streaming path.
//!
//! Used for instant replies and for pre-seeding demo transcripts. Shares
//! the paragraph/code-block templates with the chunk generator but builds
//! the whole reply in one call, no session required.

use super::lexicon::{CODE_BLOCK_PROBABILITY, build_paragraph, code_block};
use crate::core::words::count_words;
use rand::Rng;
use rand::rngs::StdRng;

/// Compose a complete reply of at least `target_words` words.
///
/// Paragraphs (and the occasional code block) are appended until the budget
/// is met, then joined with blank lines. Always non-empty, even for a zero
/// target.
pub fn compose_reply(target_words: usize, rng: &mut StdRng) -> String {
    let target = target_words.max(1);
    let mut parts: Vec<String> = Vec::new();
    let mut words = 0;

    while words < target {
        let paragraph = build_paragraph(rng);
        words += count_words(&paragraph);
        parts.push(paragraph);

        if rng.gen_bool(CODE_BLOCK_PROBABILITY) {
            let block = code_block(rng);
            words += count_words(&block);
            parts.push(block);
        }
    }

    parts.join("\n\n")
}

/// Sample assistant replies for pre-seeding a demo transcript.
///
/// Word counts ramp over a small cycle so the samples vary in length
/// without being random about it.
pub fn history_samples(count: usize, rng: &mut StdRng) -> Vec<String> {
    (0..count)
        .map(|index| compose_reply(60 + (index % 4) * 40, rng))
        .collect()
}
