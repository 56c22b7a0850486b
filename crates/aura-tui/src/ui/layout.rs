//! Layout for the chat view.
//!
//! ```text
//! ┌ sidebar ┐┌──────────── main ─────────────┐
//! │ Aura AI ││        Good Morning, John      │
//! │         ││   ┌ composer ───────────────┐  │
//! │ nav     ││   └─────────────────────────┘  │
//! │         ││   [suggestion] [suggestion]    │
//! │ profile ││ footer hints                   │
//! └─────────┘└────────────────────────────────┘
//! ```
//!
//! The same function is used for rendering and for the scroll math in
//! [`crate::App`], so both agree on the transcript viewport.

use aura_engine::DisplayState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;
/// Sidebar width when open.
pub const SIDEBAR_WIDTH: u16 = 28;
/// Narrowest main area the sidebar is allowed to squeeze.
const MIN_MAIN_WIDTH: u16 = 36;
/// Lines reserved for draft text in the composer.
pub const COMPOSER_TEXT_LINES: u16 = 3;
/// Height of the suggestion grid (two rows of bordered buttons).
pub const SUGGESTIONS_HEIGHT: u16 = 6;

/// Regions of the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    /// Sidebar, when open and the terminal is wide enough.
    pub sidebar: Option<Rect>,
    /// Greeting headline and subtitle (empty conversation only).
    pub greeting: Option<Rect>,
    /// Message list (active conversation only).
    pub transcript: Option<Rect>,
    /// Composer box.
    pub composer: Rect,
    /// Suggested prompts (empty conversation only).
    pub suggestions: Option<Rect>,
    /// Footer hints line.
    pub footer: Rect,
}

/// Height of the composer box including borders.
pub fn composer_height(has_attachments: bool) -> u16 {
    2 + COMPOSER_TEXT_LINES + 1 + u16::from(has_attachments)
}

/// Compute the chat view regions.
pub fn chat_layout(
    area: Rect,
    sidebar_open: bool,
    display: DisplayState,
    has_attachments: bool,
) -> ChatLayout {
    let show_sidebar = sidebar_open && area.width >= SIDEBAR_WIDTH + MIN_MAIN_WIDTH;

    let (sidebar, main) = if show_sidebar {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(main);
    let (body, footer) = (rows[0], rows[1]);

    // Content column is 80% of the main area, centered.
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(body)[1];

    let composer_h = composer_height(has_attachments);

    match display {
        DisplayState::Empty => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(3),
                    Constraint::Length(composer_h),
                    Constraint::Length(1),
                    Constraint::Length(SUGGESTIONS_HEIGHT),
                    Constraint::Fill(1),
                ])
                .split(column);
            ChatLayout {
                sidebar,
                greeting: Some(chunks[1]),
                transcript: None,
                composer: chunks[2],
                suggestions: Some(chunks[4]),
                footer,
            }
        }
        DisplayState::Active => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(composer_h)])
                .split(column);
            ChatLayout {
                sidebar,
                greeting: None,
                transcript: Some(chunks[0]),
                composer: chunks[1],
                suggestions: None,
                footer,
            }
        }
    }
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
