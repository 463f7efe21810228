//! Chat Service — the engine task and its handle.
//!
//! Architecture (one task owns all mutable state):
//!
//! ```text
//! ChatService (handle)                 engine task (tokio::spawn)
//!   ├─ cmd_tx ────────────────────▶     ├─ cmd_rx.recv()       (user intents)
//!   ├─ snapshot_rx ◀──────────────      ├─ producer interval   (chunk ticks)
//!   └─ CancellationToken ─────────▶     ├─ frame interval      (flush frames)
//!                                       └─ ChatController      (all state)
//! ```
//!
//! Two independent clocks — a fixed-interval producer and a render-frame
//! interval — plus the command channel all feed one `select!` loop, so every
//! mutation is serialized through a single consumer. The producer branch is
//! gated on the streaming phase: once a session leaves `Streaming` (stop,
//! restart, completion), no further tick can reach the controller. That is
//! the cancellation guarantee — `stop_generation().await` returns only after
//! the engine task has acknowledged the stop, at which point no late tick
//! can be observed.

use crate::config::StreamParams;
use crate::use_cases::chat_controller::{ChatController, ChatSnapshot};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Commands accepted by the engine task.
#[derive(Debug)]
pub enum ChatCommand {
    /// User message followed by a streamed reply.
    SendMessage(String),
    /// User message followed by an instant reply.
    SendMessageInstant(String),
    /// User message with no reply.
    AddUserMessage(String),
    /// Start a bare streaming session.
    StartGeneration,
    /// Stop the active session; `ack` fires after the stop is applied.
    StopGeneration { ack: Option<oneshot::Sender<()>> },
    /// Stop and clear the transcript; `ack` fires after the clear.
    ClearHistory { ack: Option<oneshot::Sender<()>> },
    /// Presentation auto-scroll preference.
    SetAutoScroll(bool),
    /// Pre-populate the transcript with sample exchanges.
    SeedHistory(usize),
    /// Terminate the engine task.
    Shutdown,
}

/// Errors surfaced by [`ChatService`] handle methods.
#[derive(Error, Debug)]
pub enum ChatServiceError {
    #[error("chat engine task is no longer running")]
    Disconnected,
}

/// Handle to a running chat engine.
///
/// Cheap to use from any task; dropping the handle cancels the engine.
pub struct ChatService {
    cmd_tx: mpsc::UnboundedSender<ChatCommand>,
    snapshot_rx: watch::Receiver<ChatSnapshot>,
    cancel: CancellationToken,
}

impl ChatService {
    /// Spawn an engine with the given pacing and no transcript log.
    pub fn spawn(params: StreamParams) -> Self {
        Self::spawn_with(ChatController::new(params))
    }

    /// Spawn an engine around a pre-built controller (custom RNG, logger).
    pub fn spawn_with(controller: ChatController) -> Self {
        let snapshot_rx = controller.subscribe();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        tokio::spawn(engine_loop(controller, cmd_rx, cancel.clone()));

        Self {
            cmd_tx,
            snapshot_rx,
            cancel,
        }
    }

    fn send(&self, command: ChatCommand) -> Result<(), ChatServiceError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| ChatServiceError::Disconnected)
    }

    /// User message followed by a streamed reply.
    pub fn send_message(&self, text: impl Into<String>) -> Result<(), ChatServiceError> {
        self.send(ChatCommand::SendMessage(text.into()))
    }

    /// User message followed by a synchronously composed reply.
    pub fn send_message_instant(&self, text: impl Into<String>) -> Result<(), ChatServiceError> {
        self.send(ChatCommand::SendMessageInstant(text.into()))
    }

    /// User message with no reply attached.
    pub fn add_user_message(&self, text: impl Into<String>) -> Result<(), ChatServiceError> {
        self.send(ChatCommand::AddUserMessage(text.into()))
    }

    /// Start a streaming session without a user message.
    pub fn start_generation(&self) -> Result<(), ChatServiceError> {
        self.send(ChatCommand::StartGeneration)
    }

    /// Stop the active session and wait until the engine has applied it.
    ///
    /// After this returns, no further producer tick is observed — the stop
    /// ran inside the engine task, behind every tick delivered before it.
    pub async fn stop_generation(&self) -> Result<(), ChatServiceError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(ChatCommand::StopGeneration { ack: Some(ack_tx) })?;
        ack_rx.await.map_err(|_| ChatServiceError::Disconnected)
    }

    /// Stop any session, clear the transcript, and wait for it to land.
    pub async fn clear_history(&self) -> Result<(), ChatServiceError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(ChatCommand::ClearHistory { ack: Some(ack_tx) })?;
        ack_rx.await.map_err(|_| ChatServiceError::Disconnected)
    }

    /// Toggle the auto-scroll preference.
    pub fn set_auto_scroll(&self, enabled: bool) -> Result<(), ChatServiceError> {
        self.send(ChatCommand::SetAutoScroll(enabled))
    }

    /// Pre-populate the transcript with `count` sample exchanges.
    pub fn seed_history(&self, count: usize) -> Result<(), ChatServiceError> {
        self.send(ChatCommand::SeedHistory(count))
    }

    /// Latest published state.
    pub fn snapshot(&self) -> ChatSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribe to state updates (at most one per render frame while
    /// streaming).
    pub fn subscribe(&self) -> watch::Receiver<ChatSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Ask the engine task to exit. Pending commands ahead of the shutdown
    /// are still applied.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(ChatCommand::Shutdown);
    }
}

impl Drop for ChatService {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// The engine task: one serialized consumer for commands and both clocks.
async fn engine_loop(
    mut controller: ChatController,
    mut cmd_rx: mpsc::UnboundedReceiver<ChatCommand>,
    cancel: CancellationToken,
) {
    let mut producer = tokio::time::interval(controller.params().tick_interval);
    producer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frame = tokio::time::interval(controller.params().frame_interval);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut session_seq = controller.session_seq();

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                controller.stop();
                break;
            }

            command = cmd_rx.recv() => {
                match command {
                    Some(ChatCommand::Shutdown) | None => {
                        controller.stop();
                        break;
                    }
                    Some(command) => apply_command(&mut controller, command),
                }
                if controller.session_seq() != session_seq {
                    session_seq = controller.session_seq();
                    // Fresh session: the first chunk arrives one full
                    // producer interval after start, not immediately.
                    producer.reset();
                }
            }

            _ = producer.tick(), if controller.is_streaming() => {
                controller.on_tick();
            }

            _ = frame.tick(), if controller.flush_scheduled() => {
                controller.on_frame();
            }
        }
    }

    debug!("chat engine task stopped");
}

fn apply_command(controller: &mut ChatController, command: ChatCommand) {
    match command {
        ChatCommand::SendMessage(text) => controller.send_message(&text),
        ChatCommand::SendMessageInstant(text) => controller.send_message_instant(&text),
        ChatCommand::AddUserMessage(text) => {
            controller.add_user_message(&text);
        }
        ChatCommand::StartGeneration => controller.start_stream(),
        ChatCommand::StopGeneration { ack } => {
            controller.stop();
            if let Some(ack) = ack {
                let _ = ack.send(());
            }
        }
        ChatCommand::ClearHistory { ack } => {
            controller.clear_history();
            if let Some(ack) = ack {
                let _ = ack.send(());
            }
        }
        ChatCommand::SetAutoScroll(enabled) => controller.set_auto_scroll(enabled),
        ChatCommand::SeedHistory(count) => controller.seed_history(count),
        // Handled by the engine loop before dispatch.
        ChatCommand::Shutdown => {}
    }
}
