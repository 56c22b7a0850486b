//! Screens for the aura TUI.

pub mod chat;

use crate::app::App;
use crate::theme::Theme;
use crate::ui::centered_fixed;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Draw the whole UI for one frame.
pub fn draw(app: &App, area: Rect, buf: &mut Buffer) {
    chat::ChatScreen.render(app, area, buf);

    // Render help overlay if visible
    if app.show_help {
        render_help_overlay(area, buf, &app.theme);
    }
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let help_text = r"
  Composer
    Enter             Send message
    Ctrl+J            New line
    Alt+I / Alt+V     Attach image / video
    Alt+A             Fetch from API

  Navigation
    Tab / Shift+Tab   Next/prev region
    Up/Down, PgUp/Dn  Scroll conversation
    Ctrl+B            Toggle sidebar
    Esc               Back to composer
    Ctrl+C / Ctrl+Q   Quit

  [Press any key to close]
";

    // Calculate overlay size
    let width = 50.min(area.width.saturating_sub(4));
    let height = 19.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    // Clear the area
    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().fg(theme.text).bg(theme.overlay));

    Paragraph::new(help_text).block(block).render(overlay_area, buf);
}
