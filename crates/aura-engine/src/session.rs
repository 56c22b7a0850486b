//! Chat session: the state container behind the chat view.
//!
//! Owns the composer, the conversation log and the reply simulator, and is
//! the only writer of the log.

use std::sync::Arc;
use std::time::Duration;

use crate::composer::Composer;
use crate::conversation::{ConversationLog, DisplayState};
use crate::message::{AttachmentMeta, Message};
use crate::responder::{ResponsePicker, ResponseSimulator};

/// Outcome of [`ChatSession::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Draft was blank and nothing was attached; nothing changed.
    Ignored,
    /// A user message was appended and a reply scheduled.
    Accepted {
        /// Id of the appended user message.
        message_id: String,
        /// Sequence number of the scheduled reply.
        reply_seq: u64,
    },
}

impl SendOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Composer, log and simulator for one chat view.
#[derive(Debug)]
pub struct ChatSession {
    composer: Composer,
    log: ConversationLog,
    simulator: ResponseSimulator,
}

impl ChatSession {
    /// Create a session whose replies are chosen at random.
    pub fn new(reply_delay: Duration) -> Self {
        Self::from_simulator(ResponseSimulator::new(reply_delay))
    }

    /// Create a session with an injected response picker.
    pub fn with_picker(reply_delay: Duration, picker: Arc<dyn ResponsePicker>) -> Self {
        Self::from_simulator(ResponseSimulator::with_picker(reply_delay, picker))
    }

    fn from_simulator(simulator: ResponseSimulator) -> Self {
        Self {
            composer: Composer::new(),
            log: ConversationLog::new(),
            simulator,
        }
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn display_state(&self) -> DisplayState {
        self.log.display_state()
    }

    /// Send the current draft.
    ///
    /// No-op unless the trimmed draft is non-empty or something is attached.
    /// Otherwise appends the user message, clears the composer and schedules
    /// one assistant reply. Must be called from within a tokio runtime.
    pub fn send(&mut self) -> SendOutcome {
        if !self.composer.is_sendable() {
            return SendOutcome::Ignored;
        }

        let (text, attachments) = self.composer.take();
        let metas: Vec<AttachmentMeta> = attachments.iter().map(AttachmentMeta::from).collect();
        let message = Message::user(text, metas);
        let message_id = message.id.clone();

        tracing::info!(
            id = %message_id,
            chars = message.text.chars().count(),
            attachments = message.attachments.len(),
            "Sending message"
        );

        self.log.append(message);
        let reply_seq = self.simulator.schedule();

        SendOutcome::Accepted {
            message_id,
            reply_seq,
        }
    }

    /// Append every reply that has fired. Returns how many were appended.
    pub fn poll_replies(&mut self) -> usize {
        let replies = self.simulator.poll();
        let count = replies.len();
        for reply in replies {
            self.log.append(Message::assistant(reply.text));
        }
        count
    }

    /// Wait for the next reply and append it.
    ///
    /// Returns `None` immediately when no reply is pending.
    pub async fn next_reply(&mut self) -> Option<&Message> {
        let reply = self.simulator.next().await?;
        self.log.append(Message::assistant(reply.text));
        self.log.last()
    }

    /// Replies scheduled but not yet appended.
    pub fn pending_replies(&self) -> usize {
        self.simulator.pending()
    }

    /// Abort outstanding replies; used when the view goes away.
    pub fn cancel_pending(&mut self) {
        self.simulator.cancel_all();
    }
}
