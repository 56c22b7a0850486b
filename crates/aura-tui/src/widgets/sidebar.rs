//! Navigation sidebar: brand header, nav entries and profile footer.

use aura_engine::UserProfile;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::{IconSet, Theme};

/// Sidebar entries, top to bottom.
pub const NAV_ITEMS: [&str; 4] = ["New Chat", "Explore", "Library", "Chat History"];

const BRAND: &str = "Aura AI";
const TAGLINE: &str = "Cognition & Connection";

/// Sidebar widget.
pub struct Sidebar<'a> {
    profile: &'a UserProfile,
    theme: &'a Theme,
    icons: &'a IconSet,
    selected: Option<usize>,
}

impl<'a> Sidebar<'a> {
    pub fn new(profile: &'a UserProfile, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            profile,
            theme,
            icons,
            selected: None,
        }
    }

    /// Highlight an entry (sidebar has focus).
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    fn nav_icon(&self, index: usize) -> &'static str {
        match index {
            0 => self.icons.new_chat(),
            1 => self.icons.explore(),
            2 => self.icons.library(),
            _ => self.icons.history(),
        }
    }

    fn header(&self, width: usize) -> Vec<Line<'static>> {
        let brand = format!("{} {BRAND}", self.icons.brand());
        let toggle = format!("{} ^B", self.icons.panel_close());
        let gap = width.saturating_sub(brand.chars().count() + toggle.chars().count());

        vec![
            Line::from(vec![
                Span::styled(
                    brand,
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(gap)),
                Span::styled(toggle, Style::default().fg(self.theme.muted)),
            ]),
            Line::from(Span::styled(
                format!("  {TAGLINE}"),
                Style::default().fg(self.theme.subtext),
            )),
        ]
    }

    fn nav(&self) -> Vec<Line<'static>> {
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let text = format!(" {} {label}", self.nav_icon(i));
                if self.selected == Some(i) {
                    Line::from(Span::styled(
                        text,
                        Style::default()
                            .fg(self.theme.base)
                            .bg(self.theme.primary)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(text, Style::default().fg(self.theme.text)))
                }
            })
            .collect()
    }

    fn profile(&self, width: usize) -> Vec<Line<'static>> {
        let initials = self.profile.initials();
        let avatar = if initials.is_empty() {
            "(?)".to_string()
        } else {
            format!("({initials})")
        };
        let room = width.saturating_sub(avatar.chars().count() + 1);

        vec![
            Line::from(vec![
                Span::styled(
                    avatar,
                    Style::default()
                        .fg(self.theme.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&self.profile.name, room),
                    Style::default().fg(self.theme.text),
                ),
            ]),
            Line::from(Span::styled(
                truncate_to_width(&self.profile.email, width),
                Style::default().fg(self.theme.muted),
            )),
        ]
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(inner);

        let width = usize::from(inner.width);
        Paragraph::new(self.header(width)).render(chunks[0], buf);
        Paragraph::new(self.nav()).render(chunks[1], buf);
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(self.theme.border),
        )))
        .render(chunks[2], buf);
        Paragraph::new(self.profile(width)).render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    fn render(selected: Option<usize>) -> String {
        let profile = UserProfile::default();
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let area = Rect::new(0, 0, 28, 16);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&profile, &theme, &icons)
            .selected(selected)
            .render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_sidebar_shows_brand_and_nav() {
        let text = render(None);
        assert!(text.contains("Aura AI"));
        assert!(text.contains("Cognition & Connection"));
        for item in NAV_ITEMS {
            assert!(text.contains(item), "missing {item}");
        }
    }

    #[test]
    fn test_sidebar_shows_profile() {
        let text = render(Some(1));
        assert!(text.contains("(JD) John Doe"));
        assert!(text.contains("john.doe@example.com"));
    }
}
