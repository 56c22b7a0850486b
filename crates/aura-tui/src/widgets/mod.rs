//! Widgets for the chat view.
//!
//! This module provides:
//! - [`Sidebar`] - Brand, navigation and profile
//! - [`Greeting`], [`Suggestions`] - Empty conversation screen
//! - [`Transcript`] - Message list
//! - [`ComposerBox`] - Draft editor with attachment and action chips
//! - [`FilePickerDialog`] - Path entry overlay for attachments
//! - [`FooterHints`] - Bottom keybinding hints

mod composer;
mod file_picker;
mod footer_hints;
mod greeting;
mod sidebar;
mod transcript;

pub use composer::{ComposerBox, PLACEHOLDER};
pub use file_picker::FilePickerDialog;
pub use footer_hints::{FooterHints, KeyHint};
pub use greeting::{Greeting, Suggestions};
pub use sidebar::{Sidebar, NAV_ITEMS};
pub use transcript::{transcript_lines, Transcript};
