//! Text utilities shared by the widgets.
//!
//! - [`wrap_text`] - Word wrapping for message bodies
//! - [`truncate_to_width`], [`visual_width`] - Unicode-aware width handling

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::wrap_text;
