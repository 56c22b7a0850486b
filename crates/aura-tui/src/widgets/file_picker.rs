//! File picker overlay for image and video attachments.
//!
//! Terminals have no native file dialog, so paths are typed in, separated
//! by `;`. Only files matching the picker's media kind are attached.

use aura_engine::MediaKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::FilePicker;
use crate::text::visual_width;
use crate::theme::{IconSet, Theme};
use crate::ui::centered_fixed;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 7;

/// Picker dialog widget.
pub struct FilePickerDialog<'a> {
    picker: &'a FilePicker,
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> FilePickerDialog<'a> {
    pub fn new(picker: &'a FilePicker, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            picker,
            theme,
            icons,
        }
    }

    fn accepted_extensions(kind: MediaKind) -> String {
        kind.extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn input_line(&self, width: usize) -> Line<'static> {
        let content = self.picker.input.content();
        let cursor = self.picker.input.cursor();
        let chars: Vec<char> = content.chars().collect();
        let cursor = cursor.min(chars.len());

        // Scroll horizontally so the cursor stays visible
        let room = width.saturating_sub(3);
        let mut start = 0;
        while start < cursor
            && visual_width(&chars[start..cursor].iter().collect::<String>()) > room
        {
            start += 1;
        }
        let before: String = chars[start..cursor].iter().collect();
        let after: String = chars[cursor..].iter().collect();

        Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.primary)),
            Span::styled(before, Style::default().fg(self.theme.text)),
            Span::styled(self.icons.cursor(), Style::default().fg(self.theme.primary)),
            Span::styled(after, Style::default().fg(self.theme.text)),
        ])
    }
}

impl Widget for FilePickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
        let height = DIALOG_HEIGHT.min(area.height.saturating_sub(2));
        let dialog = centered_fixed(width, height, area);

        Clear.render(dialog, buf);

        let kind = self.picker.kind;
        let icon = match kind {
            MediaKind::Image => self.icons.image(),
            MediaKind::Video => self.icons.video(),
        };
        let block = Block::default()
            .title(format!(" {icon} Attach {} ", kind.label().to_lowercase()))
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.overlay));
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!(
                    "Accepts {} ({})",
                    kind.accept_filter(),
                    Self::accepted_extensions(kind)
                ),
                Style::default().fg(self.theme.subtext),
            )),
            Line::default(),
            self.input_line(usize::from(inner.width)),
            Line::default(),
            Line::from(Span::styled(
                "Separate paths with ;   Enter attach   Esc cancel",
                Style::default().fg(self.theme.muted),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
