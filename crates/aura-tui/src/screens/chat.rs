//! Chat screen: sidebar, greeting or transcript, composer and footer.

use crate::app::{App, Focus};
use crate::screens::Screen;
use crate::ui::{chat_layout, MIN_HEIGHT, MIN_WIDTH};
use crate::widgets::{
    ComposerBox, FilePickerDialog, FooterHints, Greeting, Sidebar, Suggestions, Transcript,
};
use aura_engine::current_greeting;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// The chat screen.
pub struct ChatScreen;

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(app.theme.base))
            .render(area, buf);

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            render_too_small(app, area, buf);
            return;
        }

        let session = app.session();
        let attachments = session.composer().attachments();
        let layout = chat_layout(
            area,
            app.sidebar.is_open(),
            session.display_state(),
            !attachments.is_empty(),
        );

        if let Some(sidebar_area) = layout.sidebar {
            let selected = (app.focus == Focus::Sidebar).then_some(app.selected_nav);
            Sidebar::new(&app.profile, &app.theme, &app.icons)
                .selected(selected)
                .render(sidebar_area, buf);
        }

        if let Some(greeting_area) = layout.greeting {
            Greeting::new(current_greeting(), app.profile.first_name(), &app.theme)
                .render(greeting_area, buf);
        }

        if let Some(suggestions_area) = layout.suggestions {
            let selected = (app.focus == Focus::Suggestions).then_some(app.selected_suggestion);
            Suggestions::new(&app.theme)
                .selected(selected)
                .render(suggestions_area, buf);
        }

        if let Some(transcript_area) = layout.transcript {
            Transcript::new(session.log().messages(), &app.theme, &app.icons)
                .pending(session.pending_replies())
                .tick(app.tick_count)
                .offset(app.scroll.offset)
                .render(transcript_area, buf);
        }

        let selected_chip =
            (app.focus == Focus::Attachments).then_some(app.selected_attachment);
        ComposerBox::new(&app.input, attachments, &app.theme, &app.icons)
            .focused(app.focus == Focus::Composer && app.picker.is_none())
            .selected_chip(selected_chip)
            .render(layout.composer, buf);

        let hints = if app.picker.is_some() {
            FooterHints::picker_hints()
        } else {
            FooterHints::focus_hints(app.focus)
        };
        FooterHints::new(&hints, &app.theme, &app.icons)
            .sidebar_closed(!app.sidebar.is_open())
            .notification(app.notification.as_deref())
            .render(layout.footer, buf);

        if let Some(picker) = &app.picker {
            FilePickerDialog::new(picker, &app.theme, &app.icons).render(area, buf);
        }
    }
}

fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "{}x{}, need {MIN_WIDTH}x{MIN_HEIGHT}",
            area.width, area.height
        )),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.warning))
        .render(Rect::new(area.x, y, area.width, 2).intersection(area), buf);
}
