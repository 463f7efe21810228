//! Use cases — the streaming engine itself.
//!
//! [`chat_controller`] holds the synchronous state machine;
//! [`chat_service`] wraps it in the engine task that owns both clocks.

pub mod chat_controller;
pub mod chat_service;
