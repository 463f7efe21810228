//! Stateful, word-budgeted chunk producer.
//!
//! [`ChunkGenerator`] feeds the streaming session: each call to
//! [`next_chunk`](ChunkGenerator::next_chunk) returns a small piece of
//! pseudo-text with its word count, until the cumulative count reaches the
//! session target. Prose is drawn word-by-word from an internally buffered
//! paragraph; occasionally a fenced code block is emitted atomically as a
//! single chunk, which may overshoot both the per-call budget and the
//! session target. The target is a floor, not a ceiling.

use super::lexicon::{CODE_BLOCK_PROBABILITY, build_paragraph, code_block};
use crate::core::words::count_words;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One unit of generated text together with its word count.
///
/// `words` is always the whitespace-token count of `text`, so progress
/// accounting and the printable transcript can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub text: String,
    pub words: usize,
}

/// Stateful pseudo-text producer for one streaming session.
///
/// Exhausted once the cumulative word count reaches the target; further
/// calls stay `None` and are harmless.
#[derive(Debug)]
pub struct ChunkGenerator {
    rng: StdRng,
    target_words: usize,
    words_emitted: usize,
    /// Words of the paragraph currently being drained.
    paragraph: Vec<String>,
    cursor: usize,
    paragraphs_started: usize,
    /// A code block has been queued to go out as the next chunk.
    pending_code_block: bool,
}

impl ChunkGenerator {
    /// Entropy-seeded generator for a session of `target_words`.
    pub fn new(target_words: usize) -> Self {
        Self::with_rng(target_words, StdRng::from_entropy())
    }

    /// Generator with an explicit random source — same seed, same chunks.
    pub fn with_rng(target_words: usize, rng: StdRng) -> Self {
        Self {
            rng,
            target_words,
            words_emitted: 0,
            paragraph: Vec::new(),
            cursor: 0,
            paragraphs_started: 0,
            pending_code_block: false,
        }
    }

    /// The session word target.
    pub fn target_words(&self) -> usize {
        self.target_words
    }

    /// Total words emitted so far.
    pub fn words_emitted(&self) -> usize {
        self.words_emitted
    }

    /// True once the target has been reached and `next_chunk` returns `None`.
    pub fn is_exhausted(&self) -> bool {
        self.words_emitted >= self.target_words
    }

    /// Produce the next chunk of up to `word_budget` words.
    ///
    /// Returns `None` once the target is reached — terminal, but safe to
    /// keep calling. A queued code block ignores the budget and is emitted
    /// whole: splitting a fence across flushes would render as broken
    /// markdown in any consumer.
    pub fn next_chunk(&mut self, word_budget: usize) -> Option<TextChunk> {
        if self.is_exhausted() {
            return None;
        }

        if self.pending_code_block {
            self.pending_code_block = false;
            let text = format!("{}\n", code_block(&mut self.rng));
            let words = count_words(&text);
            self.words_emitted += words;
            return Some(TextChunk { text, words });
        }

        let budget = word_budget.max(1);
        if self.cursor >= self.paragraph.len() {
            self.refill_paragraph();
        }

        let end = (self.cursor + budget).min(self.paragraph.len());
        let taken = self.paragraph[self.cursor..end].join(" ");
        self.cursor = end;

        // A finished paragraph closes with a blank line; mid-paragraph
        // chunks carry the separating space so flushes concatenate exactly.
        let suffix = if self.cursor >= self.paragraph.len() {
            "\n\n"
        } else {
            " "
        };
        let text = format!("{taken}{suffix}");
        let words = count_words(&text);
        self.words_emitted += words;

        Some(TextChunk { text, words })
    }

    fn refill_paragraph(&mut self) {
        let paragraph = build_paragraph(&mut self.rng);
        self.paragraph = paragraph.split_whitespace().map(str::to_owned).collect();
        self.cursor = 0;
        self.paragraphs_started += 1;
        // Every third paragraph stays prose-only so code blocks don't pile up.
        self.pending_code_block =
            self.rng.gen_bool(CODE_BLOCK_PROBABILITY) && self.paragraphs_started % 3 != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(target: usize, seed: u64) -> ChunkGenerator {
        ChunkGenerator::with_rng(target, StdRng::seed_from_u64(seed))
    }

    /// Drain a generator fully, returning chunks.
    fn drain(generator: &mut ChunkGenerator, budget: usize) -> Vec<TextChunk> {
        let mut chunks = Vec::new();
        while let Some(chunk) = generator.next_chunk(budget) {
            chunks.push(chunk);
        }
        chunks
    }

    #[test]
    fn test_terminates_at_or_past_target() {
        for seed in 0..20 {
            let mut generator = seeded(50, seed);
            let chunks = drain(&mut generator, 5);
            let total: usize = chunks.iter().map(|c| c.words).sum();
            assert!(total >= 50, "seed {seed}: stopped early at {total} words");
            assert!(generator.is_exhausted());
        }
    }

    #[test]
    fn test_none_is_terminal_and_safe() {
        let mut generator = seeded(10, 1);
        drain(&mut generator, 10);
        let settled = generator.words_emitted();
        assert!(generator.next_chunk(10).is_none());
        assert!(generator.next_chunk(10).is_none());
        assert_eq!(generator.words_emitted(), settled);
    }

    #[test]
    fn test_word_count_matches_emitted_text() {
        let mut generator = seeded(120, 3);
        let mut concatenated = String::new();
        let mut accounted = 0;
        while let Some(chunk) = generator.next_chunk(7) {
            assert_eq!(
                chunk.words,
                count_words(&chunk.text),
                "per-chunk count must be the printable count"
            );
            accounted += chunk.words;
            concatenated.push_str(&chunk.text);
        }
        assert_eq!(accounted, count_words(&concatenated));
        assert_eq!(accounted, generator.words_emitted());
    }

    #[test]
    fn test_prose_chunks_respect_budget() {
        let mut generator = seeded(200, 4);
        while let Some(chunk) = generator.next_chunk(6) {
            if chunk.text.contains("```") {
                continue; // code blocks are allowed to overshoot
            }
            assert!(
                chunk.words <= 6,
                "prose chunk exceeded budget: {:?}",
                chunk.text
            );
        }
    }

    #[test]
    fn test_code_blocks_are_atomic() {
        // Scan many seeds; whenever a code block appears it must be a whole
        // fenced block inside a single chunk.
        let mut saw_code_block = false;
        for seed in 0..40 {
            let mut generator = seeded(300, seed);
            while let Some(chunk) = generator.next_chunk(4) {
                if chunk.text.contains("```") {
                    saw_code_block = true;
                    assert_eq!(
                        chunk.text.matches("```").count(),
                        2,
                        "opening and closing fence must land in one chunk"
                    );
                }
            }
        }
        assert!(saw_code_block, "no code block in 40 seeds — probability broken?");
    }

    #[test]
    fn test_zero_budget_still_makes_progress() {
        let mut generator = seeded(20, 5);
        let chunk = generator.next_chunk(0).unwrap();
        assert!(chunk.words >= 1);
    }

    #[test]
    fn test_same_seed_same_chunks() {
        let a = drain(&mut seeded(150, 42), 5);
        let b = drain(&mut seeded(150, 42), 5);
        assert_eq!(a, b);
    }

}
