//! Stream pacing parameters.
//!
//! [`StreamParams`] is consumed by the engine task (clock intervals), the
//! controller (chunk budget), and target selection (word ranges). Values
//! come from the file config or CLI overrides; defaults give a visibly
//! "typing" stream at roughly 150 words per second.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Validation errors for [`StreamParams`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("chunk_words must be greater than zero")]
    ZeroChunkWords,

    #[error("{0} word range is empty (min greater than max)")]
    EmptyRange(&'static str),
}

/// Pacing knobs for the streaming engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamParams {
    /// Producer clock period — one chunk is pulled per tick.
    pub tick_interval: Duration,
    /// Consumer ("render frame") clock period — at most one flush per frame.
    pub frame_interval: Duration,
    /// Word budget handed to the generator on each producer tick.
    pub chunk_words: usize,
    /// Inclusive target-word range for streamed replies.
    pub stream_words_min: usize,
    pub stream_words_max: usize,
    /// Inclusive target-word range for instant replies.
    pub instant_words_min: usize,
    pub instant_words_max: usize,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(40),
            frame_interval: Duration::from_millis(16),
            chunk_words: 6,
            stream_words_min: 180,
            stream_words_max: 320,
            instant_words_min: 60,
            instant_words_max: 140,
        }
    }
}

impl StreamParams {
    // ==================== Builder Methods ====================

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_chunk_words(mut self, words: usize) -> Self {
        self.chunk_words = words;
        self
    }

    pub fn with_stream_words(mut self, min: usize, max: usize) -> Self {
        self.stream_words_min = min;
        self.stream_words_max = max;
        self
    }

    pub fn with_instant_words(mut self, min: usize, max: usize) -> Self {
        self.instant_words_min = min;
        self.instant_words_max = max;
        self
    }

    /// Pin both reply ranges to a fixed word target (CLI `--words` override).
    pub fn with_fixed_target(self, words: usize) -> Self {
        self.with_stream_words(words, words)
            .with_instant_words(words, words)
    }

    // ==================== Validation & selection ====================

    /// Reject parameter sets the engine cannot run with.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.tick_interval.is_zero() {
            return Err(ParamsError::ZeroInterval("tick_interval"));
        }
        if self.frame_interval.is_zero() {
            return Err(ParamsError::ZeroInterval("frame_interval"));
        }
        if self.chunk_words == 0 {
            return Err(ParamsError::ZeroChunkWords);
        }
        if self.stream_words_min > self.stream_words_max {
            return Err(ParamsError::EmptyRange("stream"));
        }
        if self.instant_words_min > self.instant_words_max {
            return Err(ParamsError::EmptyRange("instant"));
        }
        Ok(())
    }

    /// Draw a target word count for a streamed reply.
    ///
    /// Expects a validated range — min ≤ max.
    pub fn pick_stream_target(&self, rng: &mut StdRng) -> usize {
        rng.gen_range(self.stream_words_min..=self.stream_words_max)
    }

    /// Draw a target word count for an instant reply.
    pub fn pick_instant_target(&self, rng: &mut StdRng) -> usize {
        rng.gen_range(self.instant_words_min..=self.instant_words_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(StreamParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let params = StreamParams::default()
            .with_tick_interval(Duration::from_millis(10))
            .with_chunk_words(3)
            .with_stream_words(20, 30);

        assert_eq!(params.tick_interval, Duration::from_millis(10));
        assert_eq!(params.chunk_words, 3);
        assert_eq!(params.stream_words_min, 20);
        assert_eq!(params.stream_words_max, 30);
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let params = StreamParams::default().with_tick_interval(Duration::ZERO);
        assert_eq!(
            params.validate(),
            Err(ParamsError::ZeroInterval("tick_interval"))
        );

        let params = StreamParams::default().with_frame_interval(Duration::ZERO);
        assert_eq!(
            params.validate(),
            Err(ParamsError::ZeroInterval("frame_interval"))
        );
    }

    #[test]
    fn test_validate_rejects_empty_ranges() {
        let params = StreamParams::default().with_stream_words(50, 10);
        assert_eq!(params.validate(), Err(ParamsError::EmptyRange("stream")));

        let params = StreamParams::default().with_chunk_words(0);
        assert_eq!(params.validate(), Err(ParamsError::ZeroChunkWords));
    }

    #[test]
    fn test_targets_land_in_range() {
        let params = StreamParams::default().with_stream_words(10, 20);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let target = params.pick_stream_target(&mut rng);
            assert!((10..=20).contains(&target));
        }
    }

    #[test]
    fn test_fixed_target_pins_both_ranges() {
        let params = StreamParams::default().with_fixed_target(42);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(params.pick_stream_target(&mut rng), 42);
        assert_eq!(params.pick_instant_target(&mut rng), 42);
    }
}
