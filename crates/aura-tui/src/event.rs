//! Event handling for the aura TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Text pasted while bracketed paste is enabled.
    Paste(String),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // No event, send tick
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    ToggleSidebar,
    AttachImage,
    AttachVideo,
    FetchApi,
    NextFocus,
    PrevFocus,
    /// Enter: send, accept or activate depending on focus.
    Submit,
    Newline,
    Back,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    ScrollUp,
    ScrollDown,
    Backspace,
    Delete,
    Input(char),
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c' | 'q') => Action::Quit,
            KeyCode::Char('b') => Action::ToggleSidebar,
            // Ctrl+J is what most terminals send for Ctrl+Enter
            KeyCode::Char('j') | KeyCode::Enter => Action::Newline,
            _ => Action::None,
        };
    }

    if alt {
        return match key.code {
            KeyCode::Char('i') => Action::AttachImage,
            KeyCode::Char('v') => Action::AttachVideo,
            KeyCode::Char('a') => Action::FetchApi,
            KeyCode::Enter => Action::Newline,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::F(1) => Action::Help,
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => Action::Newline,
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Back,
        KeyCode::Tab => Action::NextFocus,
        KeyCode::BackTab => Action::PrevFocus,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Home => Action::Home,
        KeyCode::End => Action::End,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Char(c) => Action::Input(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            Action::ToggleSidebar
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Action::Newline
        );
    }

    #[test]
    fn test_alt_chips() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('i'), KeyModifiers::ALT)),
            Action::AttachImage
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('v'), KeyModifiers::ALT)),
            Action::AttachVideo
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('a'), KeyModifiers::ALT)),
            Action::FetchApi
        );
    }

    #[test]
    fn test_enter_variants() {
        assert_eq!(
            key_to_action(key(KeyCode::Enter, KeyModifiers::NONE)),
            Action::Submit
        );
        assert_eq!(
            key_to_action(key(KeyCode::Enter, KeyModifiers::SHIFT)),
            Action::Newline
        );
    }

    #[test]
    fn test_plain_chars_are_input() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Action::Input('q')
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::Input('A')
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('?'), KeyModifiers::NONE)),
            Action::Input('?')
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Action::None
        );
        assert_eq!(
            key_to_action(key(KeyCode::Insert, KeyModifiers::NONE)),
            Action::None
        );
    }
}
