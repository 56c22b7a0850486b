//! Append-only conversation log.

use serde::Serialize;

use crate::message::Message;

/// Which layout the conversation calls for.
///
/// The only transition is `Empty -> Active`, on the first accepted send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// No messages yet: greeting and suggestions.
    #[default]
    Empty,
    /// At least one message: scrolling transcript.
    Active,
}

/// Ordered record of every message shown to the user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationLog {
    messages: Vec<Message>,
    #[serde(skip)]
    revision: u64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the end. Never reorders or deduplicates.
    pub fn append(&mut self, message: Message) {
        tracing::debug!(
            id = %message.id,
            sender = ?message.sender,
            position = self.messages.len(),
            "Appending message"
        );
        self.messages.push(message);
        self.revision += 1;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn display_state(&self) -> DisplayState {
        if self.messages.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Active
        }
    }

    /// Bumped on every append; lets views detect changes cheaply.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
