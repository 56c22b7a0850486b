//! Composer box: attachment chips, draft text and action chips.
//!
//! Supports multi-line drafts; Ctrl+J inserts a newline and Enter sends.

use aura_engine::{Attachment, MediaKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::{IconSet, Theme};
use crate::ui::{TextInputState, COMPOSER_TEXT_LINES};

/// Shown while the draft is empty.
pub const PLACEHOLDER: &str = "Type a message or command to the AI...";

/// Longest file name shown on a chip before truncation.
const CHIP_NAME_WIDTH: usize = 18;

/// Composer widget.
pub struct ComposerBox<'a> {
    input: &'a TextInputState,
    attachments: &'a [Attachment],
    theme: &'a Theme,
    icons: &'a IconSet,
    focused: bool,
    selected_chip: Option<usize>,
}

impl<'a> ComposerBox<'a> {
    pub fn new(
        input: &'a TextInputState,
        attachments: &'a [Attachment],
        theme: &'a Theme,
        icons: &'a IconSet,
    ) -> Self {
        Self {
            input,
            attachments,
            theme,
            icons,
            focused: false,
            selected_chip: None,
        }
    }

    /// Set whether the draft has keyboard focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Highlight an attachment chip (chips have focus).
    #[must_use]
    pub fn selected_chip(mut self, selected: Option<usize>) -> Self {
        self.selected_chip = selected;
        self
    }

    fn sendable(&self) -> bool {
        !self.input.content().trim().is_empty() || !self.attachments.is_empty()
    }

    fn chip_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, attachment) in self.attachments.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let icon = match attachment.kind {
                MediaKind::Image => self.icons.image(),
                MediaKind::Video => self.icons.video(),
            };
            let label = format!(
                "[{icon} {} {}]",
                truncate_to_width(&attachment.name, CHIP_NAME_WIDTH),
                self.icons.remove()
            );
            let style = if self.selected_chip == Some(i) {
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.secondary)
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }

    /// Draft lines and the index of the line holding the cursor.
    fn text_lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let cursor = self.icons.cursor();
        let content = self.input.content();

        if content.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(cursor, Style::default().fg(self.theme.primary)));
            }
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(self.theme.muted),
            ));
            return (vec![Line::from(spans)], 0);
        }

        let (cursor_line, cursor_col) = self.input.cursor_line_col();
        let text_style = Style::default().fg(self.theme.text);
        let lines = content
            .split('\n')
            .enumerate()
            .map(|(index, text)| {
                if !(self.focused && index == cursor_line) {
                    return Line::from(Span::styled(truncate_to_width(text, width), text_style));
                }
                // Keep the cursor in view on long lines.
                let chars: Vec<char> = text.chars().collect();
                let start = cursor_col.saturating_sub(width.saturating_sub(1));
                let before: String = chars[start..cursor_col.min(chars.len())].iter().collect();
                let after: String = chars[cursor_col.min(chars.len())..].iter().collect();
                let room = width.saturating_sub(visual_width(&before) + 1);
                Line::from(vec![
                    Span::styled(before, text_style),
                    Span::styled(cursor, Style::default().fg(self.theme.primary)),
                    Span::styled(truncate_to_width(&after, room), text_style),
                ])
            })
            .collect();
        (lines, cursor_line)
    }

    fn action_line(&self, width: usize) -> Line<'static> {
        let chip = |icon: &str, label: &str, key: &str| {
            vec![
                Span::styled(format!("{icon} {label} "), Style::default().fg(self.theme.subtext)),
                Span::styled(format!("{key}  "), Style::default().fg(self.theme.muted)),
            ]
        };
        let mut spans = Vec::new();
        spans.extend(chip(self.icons.image(), "Image", "M-i"));
        spans.extend(chip(self.icons.video(), "Video", "M-v"));
        spans.extend(chip(self.icons.globe(), "API", "M-a"));

        let send = format!("{} Send", self.icons.send());
        let used: usize = spans.iter().map(|s| visual_width(&s.content)).sum();
        let gap = width.saturating_sub(used + visual_width(&send));
        let send_style = if self.sendable() {
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(send, send_style));
        Line::from(spans)
    }
}

impl Widget for ComposerBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused || self.selected_chip.is_some() {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let chip_rows = u16::from(!self.attachments.is_empty());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(chip_rows),
                Constraint::Length(COMPOSER_TEXT_LINES),
                Constraint::Length(1),
            ])
            .split(inner);

        if chip_rows > 0 {
            Paragraph::new(self.chip_line()).render(chunks[0], buf);
        }

        let width = usize::from(inner.width);
        let (lines, cursor_line) = self.text_lines(width);
        let visible = usize::from(COMPOSER_TEXT_LINES);
        let scroll = cursor_line.saturating_sub(visible.saturating_sub(1));
        Paragraph::new(lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(chunks[1], buf);

        Paragraph::new(self.action_line(width)).render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use crate::ui::composer_height;

    fn render(input: &TextInputState, attachments: &[Attachment], focused: bool) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let area = Rect::new(0, 0, 70, composer_height(!attachments.is_empty()));
        let mut buf = Buffer::empty(area);
        ComposerBox::new(input, attachments, &theme, &icons)
            .focused(focused)
            .render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_placeholder_when_empty() {
        let text = render(&TextInputState::new(), &[], false);
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Image"));
        assert!(text.contains("Video"));
        assert!(text.contains("API"));
        assert!(text.contains("Send"));
    }

    #[test]
    fn test_draft_replaces_placeholder() {
        let mut input = TextInputState::new();
        input.set("Hello there");
        let text = render(&input, &[], true);
        assert!(text.contains("Hello there_"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_multiline_draft() {
        let mut input = TextInputState::new();
        input.set("first\nsecond");
        let text = render(&input, &[], false);
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn test_attachment_chips() {
        let attachments = vec![
            Attachment::from_path("photo.png", MediaKind::Image).unwrap(),
            Attachment::from_path("clip.mp4", MediaKind::Video).unwrap(),
        ];
        let text = render(&TextInputState::new(), &attachments, false);
        assert!(text.contains("[[img] photo.png x]"));
        assert!(text.contains("[[vid] clip.mp4 x]"));
    }

    #[test]
    fn test_long_line_keeps_cursor_visible() {
        let mut input = TextInputState::new();
        input.set(format!("{}END", "a".repeat(100)));
        let text = render(&input, &[], true);
        assert!(text.contains("END_"));
    }
}
