//! Messages exchanged in a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attachment::{Attachment, MediaKind};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person at the keyboard.
    User,
    /// Produced by the (simulated) assistant.
    Assistant,
}

impl Sender {
    /// Display label for transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Aura",
        }
    }
}

/// Name and media kind of a file that accompanied a user message.
///
/// Only metadata travels with the message; file contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    /// File name as shown on the chip.
    pub name: String,
    /// Image or video.
    pub kind: MediaKind,
}

impl From<&Attachment> for AttachmentMeta {
    fn from(attachment: &Attachment) -> Self {
        Self {
            name: attachment.name.clone(),
            kind: attachment.kind,
        }
    }
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message id.
    pub id: String,
    /// Author of the message.
    pub sender: Sender,
    /// Message body. Empty only for user messages sent with attachments.
    pub text: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// Files that accompanied a user message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentMeta>,
}

impl Message {
    /// Create a new user message.
    pub fn user(text: impl Into<String>, attachments: Vec<AttachmentMeta>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.into(),
            created_at: Utc::now(),
            attachments,
        }
    }

    /// Create a new assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: Sender::Assistant,
            text: text.into(),
            created_at: Utc::now(),
            attachments: Vec::new(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
