//! aura-tui: Terminal UI for the aura chat assistant
//!
//! This crate provides the terminal layer on top of `aura-engine`:
//! - Chat screen with sidebar, greeting, transcript and composer
//! - Attachment picker overlay and help overlay
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod text;
mod theme;
mod ui;
mod widgets;

pub use app::{App, FilePicker, Focus, ScrollState, SidebarState};
pub use aura_engine;
pub use event::{key_to_action, Action, Event, EventHandler};

use aura_engine::{Config, FetchHook};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit. Replies still pending when the user quits are dropped.
pub async fn run_tui(
    config: &Config,
    fetch: Arc<dyn FetchHook>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, fetch);
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut events = EventHandler::new(config.tick_rate_ms);
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "TUI started");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    app.shutdown();
    tracing::info!(messages = app.session().log().len(), "TUI stopped");

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.deliver_replies();

        terminal.draw(|frame| {
            let area = frame.area();
            screens::draw(app, area, frame.buffer_mut());
        })?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            Event::Key(key) => {
                // Ignore key release events on terminals that report them
                if key.kind == KeyEventKind::Press {
                    app.handle_action(key_to_action(key));
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.handle_action(Action::ScrollUp),
                MouseEventKind::ScrollDown => app.handle_action(Action::ScrollDown),
                _ => {}
            },
            Event::Paste(text) => app.paste(&text),
            Event::Tick => app.tick(),
            Event::Resize(width, height) => app.resize(width, height),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
