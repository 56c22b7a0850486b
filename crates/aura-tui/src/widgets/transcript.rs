//! Message list for an active conversation.
//!
//! User messages sit on the right in a tinted bubble, assistant messages on
//! the left. While replies are pending a spinner line trails the list.

use aura_engine::{Message, Sender};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::{truncate_to_width, visual_width, wrap_text};
use crate::theme::{IconSet, Theme};

/// Share of the width a message body may use.
const BUBBLE_PERCENT: usize = 75;

/// Build every transcript line for the given width.
///
/// Used both to render and to compute the scroll range, so the line count
/// always matches what is drawn.
pub fn transcript_lines(
    messages: &[Message],
    pending: usize,
    width: u16,
    theme: &Theme,
    icons: &IconSet,
    tick: usize,
) -> Vec<Line<'static>> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }
    let bubble = (width * BUBBLE_PERCENT / 100).clamp(1, width);
    let mut lines = Vec::new();

    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match message.sender {
            Sender::User => push_user(&mut lines, message, bubble, theme, icons),
            Sender::Assistant => push_assistant(&mut lines, message, bubble, theme, icons),
        }
    }

    if pending > 0 {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", icons.spinner(tick)),
                Style::default().fg(theme.primary),
            ),
            Span::styled(
                format!("{} is thinking...", Sender::Assistant.label()),
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}

fn push_user(
    lines: &mut Vec<Line<'static>>,
    message: &Message,
    bubble: usize,
    theme: &Theme,
    icons: &IconSet,
) {
    lines.push(
        Line::from(Span::styled(
            message.sender.label(),
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
    );

    let body_style = Style::default().fg(theme.text).bg(theme.user_bubble);
    // Pad to the widest line so the bubble has a straight left edge.
    let body = wrap_text(&message.text, bubble.saturating_sub(2));
    let inner = body.iter().map(|l| visual_width(l)).max().unwrap_or(0);
    for text in body {
        let pad = inner.saturating_sub(visual_width(&text));
        lines.push(
            Line::from(Span::styled(
                format!(" {text}{} ", " ".repeat(pad)),
                body_style,
            ))
            .alignment(Alignment::Right),
        );
    }

    for meta in &message.attachments {
        let label = format!(
            "{} {} ({})",
            icons.paperclip(),
            truncate_to_width(&meta.name, bubble.saturating_sub(12).max(4)),
            meta.kind.label()
        );
        lines.push(
            Line::from(Span::styled(label, Style::default().fg(theme.subtext)))
                .alignment(Alignment::Right),
        );
    }
}

fn push_assistant(
    lines: &mut Vec<Line<'static>>,
    message: &Message,
    bubble: usize,
    theme: &Theme,
    icons: &IconSet,
) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", icons.brand()),
            Style::default().fg(theme.primary),
        ),
        Span::styled(
            message.sender.label(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
    ]));

    for text in wrap_text(&message.text, bubble.saturating_sub(2)) {
        lines.push(Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(theme.text),
        )));
    }
}

/// Scrollable transcript widget.
pub struct Transcript<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
    icons: &'a IconSet,
    pending: usize,
    tick: usize,
    offset: usize,
}

impl<'a> Transcript<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            messages,
            theme,
            icons,
            pending: 0,
            tick: 0,
            offset: 0,
        }
    }

    /// Number of replies still on their way.
    #[must_use]
    pub fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    /// Animation tick for the spinner.
    #[must_use]
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    /// First visible line.
    #[must_use]
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = transcript_lines(
            self.messages,
            self.pending,
            area.width,
            self.theme,
            self.icons,
            self.tick,
        );
        let max = lines.len().saturating_sub(usize::from(area.height));
        let offset = u16::try_from(self.offset.min(max)).unwrap_or(u16::MAX);

        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use aura_engine::{AttachmentMeta, MediaKind};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Ascii)
    }

    #[test]
    fn test_empty_transcript_has_no_lines() {
        let lines = transcript_lines(&[], 0, 40, &Theme::default(), &icons(), 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_user_and_assistant_lines() {
        let messages = vec![
            Message::user("Hello", Vec::new()),
            Message::assistant("Hi there"),
        ];
        let lines = transcript_lines(&messages, 0, 40, &Theme::default(), &icons(), 0);
        // header + body, blank, header + body
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(lines[3].alignment, None);
    }

    #[test]
    fn test_pending_adds_thinking_line() {
        let messages = vec![Message::user("Hello", Vec::new())];
        let lines = transcript_lines(&messages, 1, 40, &Theme::default(), &icons(), 0);
        assert_eq!(lines.len(), 4);
        let last: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(last.contains("Aura is thinking..."));
    }

    #[test]
    fn test_attachment_lines() {
        let meta = AttachmentMeta {
            name: "photo.png".into(),
            kind: MediaKind::Image,
        };
        let messages = vec![Message::user("", vec![meta])];
        let lines = transcript_lines(&messages, 0, 40, &Theme::default(), &icons(), 0);
        // Header and the attachment; an empty body wraps to nothing.
        assert_eq!(lines.len(), 2);
        let text: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("photo.png (Image)"));
    }

    #[test]
    fn test_long_message_wraps() {
        let messages = vec![Message::assistant("word ".repeat(30))];
        let lines = transcript_lines(&messages, 0, 40, &Theme::default(), &icons(), 0);
        assert!(lines.len() > 3);
    }

    #[test]
    fn test_render_shows_messages() {
        let messages = vec![
            Message::user("Hello", Vec::new()),
            Message::assistant("Hi there"),
        ];
        let theme = Theme::default();
        let icons = icons();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        Transcript::new(&messages, &theme, &icons).render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("Hello"));
        assert!(text.contains("Hi there"));
        assert!(text.contains("You"));
        assert!(text.contains("Aura"));
    }

    #[test]
    fn test_render_clamps_offset() {
        let messages = vec![Message::assistant("only")];
        let theme = Theme::default();
        let icons = icons();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        Transcript::new(&messages, &theme, &icons)
            .offset(99)
            .render(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("only"));
    }
}
