// SPDX-License-Identifier: MPL-2.0
//! Tokio glue for the viewer.
//!
//! The driver owns the [`Viewer`] and an inbox. Closing transitions get a
//! fallback timer task that posts [`Message::FallbackElapsed`] back into the
//! inbox; whichever of the timer or the rendering layer's completion signal
//! arrives first tears the viewer down, and the other one is a no-op.

use crate::ui::viewer::{CloseTicket, Effect, Message, Viewer};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// A pending fallback timer. Dropping it aborts the task.
#[derive(Debug)]
struct FallbackTimer {
    ticket: CloseTicket,
    handle: JoinHandle<()>,
}

impl Drop for FallbackTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs a [`Viewer`] inside a tokio runtime.
///
/// Must be used from within a runtime: scheduling a close spawns a task.
#[derive(Debug)]
pub struct ViewerDriver {
    viewer: Viewer,

    /// Sender half handed to timers and to the rendering layer.
    inbox_tx: mpsc::UnboundedSender<Message>,

    /// Messages waiting to be dispatched.
    inbox_rx: mpsc::UnboundedReceiver<Message>,

    timer: Option<FallbackTimer>,
}

impl ViewerDriver {
    #[must_use]
    pub fn new(viewer: Viewer) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            viewer,
            inbox_tx,
            inbox_rx,
            timer: None,
        }
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// A sender for posting messages from outside, such as transition
    /// completion signals from the rendering layer.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.inbox_tx.clone()
    }

    /// The ticket of the armed fallback timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<CloseTicket> {
        self.timer.as_ref().map(|timer| timer.ticket)
    }

    /// Handles a message immediately and acts on its effect.
    pub fn dispatch(&mut self, message: Message) -> Effect {
        let effect = self.viewer.handle(message);

        match &effect {
            Effect::CloseScheduled { ticket, delay } => self.arm(*ticket, *delay),
            Effect::Closed => {
                if let Some(timer) = self.timer.take() {
                    tracing::debug!(ticket = timer.ticket.value(), "Fallback timer cancelled");
                }
            }
            Effect::None | Effect::Opened | Effect::FeedbackChanged(_) => {}
        }

        effect
    }

    /// Dispatches every message already waiting in the inbox.
    pub fn drain(&mut self) {
        while let Ok(message) = self.inbox_rx.try_recv() {
            self.dispatch(message);
        }
    }

    /// Dispatches inbox messages as they arrive until `duration` elapses.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;

        loop {
            tokio::select! {
                biased;
                Some(message) = self.inbox_rx.recv() => {
                    self.dispatch(message);
                }
                () = tokio::time::sleep_until(deadline) => break,
            }
        }
    }

    fn arm(&mut self, ticket: CloseTicket, delay: Duration) {
        let inbox = self.inbox_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The driver may already be gone.
            let _ = inbox.send(Message::FallbackElapsed(ticket));
        });

        tracing::debug!(
            ticket = ticket.value(),
            delay_ms = delay.as_millis() as u64,
            "Fallback timer armed"
        );
        // Replacing an older timer aborts it.
        self.timer = Some(FallbackTimer { ticket, handle });
    }
}
