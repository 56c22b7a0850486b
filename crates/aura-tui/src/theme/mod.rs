//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Aura dark, Light, High Contrast)
//! - [`IconSet`] - Icons with Unicode/ASCII modes

mod colors;
mod icons;

pub use colors::Theme;
pub use icons::{IconMode, IconSet};
