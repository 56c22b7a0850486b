//! Footer hint line.
//!
//! Format: `» ^B │ notification              [Enter] send │ [Tab] focus`
//!
//! Components:
//! - Sidebar reopen hint (only while the sidebar is closed)
//! - Transient notification, if any
//! - Key hints for the focused region, right-aligned

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::Focus;
use crate::text::visual_width;
use crate::theme::{IconSet, Theme};

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Ctrl+Q").
    pub key: String,
    /// The action description (e.g., "focus", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer hint line widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    icons: &'a IconSet,
    sidebar_closed: bool,
    notification: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            hints,
            theme,
            icons,
            sidebar_closed: false,
            notification: None,
        }
    }

    /// Show the reopen hint for a closed sidebar.
    #[must_use]
    pub fn sidebar_closed(mut self, closed: bool) -> Self {
        self.sidebar_closed = closed;
        self
    }

    /// Notification to display on the left.
    #[must_use]
    pub fn notification(mut self, notification: Option<&'a str>) -> Self {
        self.notification = notification;
        self
    }

    /// Hints for the focused region.
    pub fn focus_hints(focus: Focus) -> Vec<KeyHint> {
        match focus {
            Focus::Composer => vec![
                KeyHint::new("Enter", "send"),
                KeyHint::new("Ctrl+J", "newline"),
                KeyHint::new("Tab", "focus"),
                KeyHint::new("F1", "help"),
            ],
            Focus::Attachments => vec![
                KeyHint::new("←/→", "select"),
                KeyHint::new("Del", "remove"),
                KeyHint::new("Esc", "back"),
            ],
            Focus::Suggestions => vec![
                KeyHint::new("Arrows", "select"),
                KeyHint::new("Enter", "use"),
                KeyHint::new("Esc", "back"),
            ],
            Focus::Sidebar => vec![
                KeyHint::new("↑/↓", "select"),
                KeyHint::new("Enter", "open"),
                KeyHint::new("Esc", "back"),
            ],
        }
    }

    /// Hints while the file picker is open.
    pub fn picker_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "attach"),
            KeyHint::new("Esc", "cancel"),
        ]
    }
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| visual_width(&s.content)).sum()
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if self.sidebar_closed {
            left_spans.push(Span::styled(
                format!("{} ^B", self.icons.panel_open()),
                Style::default().fg(self.theme.primary),
            ));
        }

        if let Some(note) = self.notification {
            if !left_spans.is_empty() {
                left_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            left_spans.push(Span::styled(
                note.to_string(),
                Style::default().fg(self.theme.warning),
            ));
        }

        // Right side: hints (rendered right-aligned)
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.clone(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.clone(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let left_width = spans_width(&left_spans);
        let right_width = spans_width(&right_spans);
        let total = usize::from(area.width);

        // Drop hints before the notification when space runs out
        let mut spans = left_spans;
        if left_width + right_width + 1 <= total {
            spans.push(Span::raw(" ".repeat(total - left_width - right_width)));
            spans.extend(right_spans);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().fg(self.theme.text))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    fn render(footer: FooterHints<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_hints_render() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let hints = FooterHints::focus_hints(Focus::Composer);
        let text = render(FooterHints::new(&hints, &theme, &icons), 80);
        assert!(text.contains("[Enter] send"));
        assert!(text.contains("[Tab] focus"));
        assert!(!text.contains("^B"));
    }

    #[test]
    fn test_closed_sidebar_hint() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let hints = FooterHints::picker_hints();
        let text = render(
            FooterHints::new(&hints, &theme, &icons).sidebar_closed(true),
            80,
        );
        assert!(text.starts_with(">> ^B"));
    }

    #[test]
    fn test_notification_wins_over_hints() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let hints = FooterHints::focus_hints(Focus::Composer);
        let text = render(
            FooterHints::new(&hints, &theme, &icons).notification(Some("Skipped 1 file: a.txt")),
            30,
        );
        assert!(text.contains("Skipped 1 file"));
        assert!(!text.contains("[Enter]"));
    }
}
