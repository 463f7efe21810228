//! Application-level configuration.
//!
//! [`StreamParams`] groups the pacing knobs of the streaming engine: clock
//! intervals, the per-tick word budget, and the target-word ranges for
//! streamed and instant replies. None of them affect correctness, only
//! pacing.

pub mod stream_params;

pub use stream_params::{ParamsError, StreamParams};
