//! Layout helpers and input state for the aura TUI.

pub mod layout;
mod text_input;

pub use layout::*;
pub use text_input::TextInputState;
