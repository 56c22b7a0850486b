//! aura-engine: Headless chat core for the aura terminal assistant
//!
//! This crate provides everything behind the chat view, without any
//! terminal code:
//! - Composer state (draft text and attachments)
//! - Append-only conversation log
//! - Simulated assistant replies on a deferred timer
//! - Profile, greeting and configuration

pub mod attachment;
pub mod composer;
pub mod config;
pub mod conversation;
pub mod fetch;
pub mod message;
pub mod profile;
pub mod responder;
pub mod session;

// Re-export commonly used types
pub use attachment::{pick_files, Attachment, MediaKind, PickResult, PickerError};
pub use composer::Composer;
pub use config::{Config, ConfigError, IconStyle, ThemeName};
pub use conversation::{ConversationLog, DisplayState};
pub use fetch::{FetchHook, NoopFetch};
pub use message::{AttachmentMeta, Message, Sender};
pub use profile::{
    current_greeting, greeting_for_hour, UserProfile, GREETING_SUBTITLE, SUGGESTED_PROMPTS,
};
pub use responder::{
    FixedPicker, RandomPicker, Reply, ResponsePicker, ResponseSimulator, CANNED_RESPONSES,
    DEFAULT_REPLY_DELAY,
};
pub use session::{ChatSession, SendOutcome};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
