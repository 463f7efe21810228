//! Progress reporting for streaming generation

use indicatif::{ProgressBar, ProgressStyle};

/// Renders word-count progress for an active streaming session
pub struct ProgressReporter;

impl ProgressReporter {
    fn stream_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} words")
            .unwrap()
            .progress_chars("=>-")
    }

    /// Create a bar sized to the session's word target.
    pub fn stream_bar(target_words: usize) -> ProgressBar {
        let bar = ProgressBar::new(target_words.max(1) as u64);
        bar.set_style(Self::stream_style());
        bar.set_prefix("generating");
        bar
    }

    /// Push the published counters into the bar.
    ///
    /// Code-block overshoot can carry the position past the target; the bar
    /// clamps rather than growing, matching the floor-not-ceiling target.
    pub fn update(bar: &ProgressBar, generated_words: usize, target_words: usize) {
        if target_words > 0 {
            bar.set_length(target_words as u64);
        }
        bar.set_position(generated_words.min(target_words) as u64);
    }

    /// Remove the bar from the terminal.
    pub fn finish(bar: &ProgressBar) {
        bar.finish_and_clear();
    }
}
