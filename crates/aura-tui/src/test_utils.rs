//! Test utilities for aura-tui render tests.
//!
//! Helpers for creating test terminals and apps, and for turning rendered
//! buffers into plain strings that tests can search.

use std::sync::Arc;

use crate::app::App;
use crate::screens;

pub use crate::headless::buffer_to_string;
use aura_engine::{ChatSession, Config, FixedPicker, NoopFetch, DEFAULT_REPLY_DELAY};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 100;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 30;

/// Create a test terminal with the default dimensions.
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with deterministic replies, sized to the test terminal.
pub fn create_test_app() -> App {
    let config = Config::default();
    let session = ChatSession::with_picker(DEFAULT_REPLY_DELAY, Arc::new(FixedPicker(0)));
    let mut app = App::with_session(&config, session, Arc::new(NoopFetch));
    app.resize(TEST_WIDTH, TEST_HEIGHT);
    app
}

/// Render the whole UI at the default test size.
pub fn render_app(app: &App) -> String {
    render_app_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the whole UI at a custom size.
pub fn render_app_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    screens::draw(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_draw_through_terminal() {
        let mut terminal = create_test_terminal();
        let app = create_test_app();
        terminal
            .draw(|frame| {
                let area = frame.area();
                screens::draw(&app, area, frame.buffer_mut());
            })
            .unwrap();
        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Aura AI"));
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
