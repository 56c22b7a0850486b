//! Greeting headline and suggested prompts for an empty conversation.

use aura_engine::{GREETING_SUBTITLE, SUGGESTED_PROMPTS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::Theme;

/// "Good Morning, John" plus the subtitle, centered.
pub struct Greeting<'a> {
    salutation: &'a str,
    name: &'a str,
    theme: &'a Theme,
}

impl<'a> Greeting<'a> {
    pub fn new(salutation: &'a str, name: &'a str, theme: &'a Theme) -> Self {
        Self {
            salutation,
            name,
            theme,
        }
    }
}

impl Widget for Greeting<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{}, ", self.salutation),
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.name.to_string(),
                    Style::default()
                        .fg(self.theme.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                GREETING_SUBTITLE,
                Style::default().fg(self.theme.subtext),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Two-by-two grid of suggested prompt buttons.
pub struct Suggestions<'a> {
    theme: &'a Theme,
    selected: Option<usize>,
}

impl<'a> Suggestions<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            selected: None,
        }
    }

    /// Highlight a button (suggestions have focus).
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for Suggestions<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);

        for (row_index, row) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);

            for (col_index, cell) in cells.iter().enumerate() {
                let index = row_index * 2 + col_index;
                let Some(prompt) = SUGGESTED_PROMPTS.get(index) else {
                    continue;
                };
                let focused = self.selected == Some(index);
                let border_style = if focused {
                    Style::default().fg(self.theme.border_focused)
                } else {
                    Style::default().fg(self.theme.border)
                };
                let text_style = if focused {
                    Style::default()
                        .fg(self.theme.text)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.subtext)
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style);
                let width = usize::from(cell.width.saturating_sub(2));
                Paragraph::new(Span::styled(truncate_to_width(prompt, width), text_style))
                    .alignment(Alignment::Center)
                    .block(block)
                    .render(*cell, buf);
            }
        }
    }
}
