//! Application state and update logic for the aura TUI.

use std::sync::Arc;

use aura_engine::{
    pick_files, ChatSession, Config, DisplayState, FetchHook, MediaKind, UserProfile,
    SUGGESTED_PROMPTS,
};
use ratatui::layout::Rect;

use crate::event::Action;
use crate::theme::{IconMode, IconSet, Theme};
use crate::ui::{chat_layout, ChatLayout, TextInputState};
use crate::widgets::{transcript_lines, NAV_ITEMS};

/// Ticks a notification stays on screen.
const NOTIFICATION_TTL: usize = 12;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

/// Whether the sidebar is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Open,
    Closed,
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Region receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Composer,
    /// Attachment chips above the draft.
    Attachments,
    /// Suggested prompt buttons (empty conversation only).
    Suggestions,
    Sidebar,
}

/// Open file picker overlay.
#[derive(Debug)]
pub struct FilePicker {
    /// Media kind the picker filters on.
    pub kind: MediaKind,
    /// Paths typed so far, separated by `;`.
    pub input: TextInputState,
}

/// Transcript scroll position.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    /// First visible transcript line.
    pub offset: usize,
    /// Ease towards the newest message on each tick.
    pub follow: bool,
    seen_revision: u64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            seen_revision: 0,
        }
    }
}

/// Main application state.
pub struct App {
    session: ChatSession,

    /// Draft editor, mirrored into the session composer on every edit.
    pub input: TextInputState,

    pub sidebar: SidebarState,

    pub focus: Focus,

    /// File picker overlay, when open.
    pub picker: Option<FilePicker>,

    /// Whether the help overlay is shown.
    pub show_help: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    pub profile: UserProfile,

    pub theme: Theme,

    pub icons: IconSet,

    pub scroll: ScrollState,

    /// Highlighted sidebar entry.
    pub selected_nav: usize,

    /// Highlighted suggested prompt.
    pub selected_suggestion: usize,

    /// Highlighted attachment chip.
    pub selected_attachment: usize,

    /// Notification message (temporary).
    pub notification: Option<String>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,

    /// Last known terminal size (width, height).
    pub terminal_size: (u16, u16),

    /// Tick counter for animations.
    pub tick_count: usize,

    fetch: Arc<dyn FetchHook>,
}

impl App {
    /// Create the app from configuration.
    pub fn new(config: &Config, fetch: Arc<dyn FetchHook>) -> Self {
        Self::with_session(config, ChatSession::new(config.reply_delay()), fetch)
    }

    /// Create the app around an existing session.
    pub fn with_session(config: &Config, session: ChatSession, fetch: Arc<dyn FetchHook>) -> Self {
        let sidebar = if config.sidebar_open {
            SidebarState::Open
        } else {
            SidebarState::Closed
        };

        Self {
            session,
            input: TextInputState::new(),
            sidebar,
            focus: Focus::Composer,
            picker: None,
            show_help: false,
            should_quit: false,
            profile: config.profile.clone(),
            theme: Theme::from_name(config.theme),
            icons: IconSet::new(IconMode::resolve(config.icons)),
            scroll: ScrollState::default(),
            selected_nav: 0,
            selected_suggestion: 0,
            selected_attachment: 0,
            notification: None,
            notification_ttl: 0,
            terminal_size: (80, 24),
            tick_count: 0,
            fetch,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        // Any key closes help
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.picker.is_some() {
            self.handle_picker_action(action);
            return;
        }

        match action {
            Action::Help => self.show_help = true,
            Action::ToggleSidebar => self.sidebar = self.sidebar.toggled(),
            Action::AttachImage => self.open_picker(MediaKind::Image),
            Action::AttachVideo => self.open_picker(MediaKind::Video),
            Action::FetchApi => self.fetch.fetch(),
            Action::NextFocus => self.cycle_focus(true),
            Action::PrevFocus => self.cycle_focus(false),
            Action::ScrollUp => self.scroll_up(WHEEL_STEP),
            Action::ScrollDown => self.scroll_down(WHEEL_STEP),
            Action::PageUp => self.scroll_up(self.page_size()),
            Action::PageDown => self.scroll_down(self.page_size()),
            _ => match self.focus {
                Focus::Composer => self.handle_composer_action(action),
                Focus::Attachments => self.handle_attachments_action(action),
                Focus::Suggestions => self.handle_suggestions_action(action),
                Focus::Sidebar => self.handle_sidebar_action(action),
            },
        }

        self.normalize_focus();
    }

    /// Insert pasted text into the picker or the draft.
    pub fn paste(&mut self, text: &str) {
        if self.show_help {
            return;
        }
        if let Some(picker) = self.picker.as_mut() {
            // Paths arrive one per line; the picker splits on line breaks too
            picker.input.insert_str(text);
            return;
        }
        self.focus = Focus::Composer;
        self.input.insert_str(text);
        self.sync_draft();
    }

    fn handle_composer_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => self.input.insert(c),
            Action::Newline => self.input.insert('\n'),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::Up => self.scroll_up(1),
            Action::Down => self.scroll_down(1),
            Action::Submit => {
                self.send();
                return;
            }
            _ => return,
        }
        self.sync_draft();
    }

    fn handle_attachments_action(&mut self, action: Action) {
        let count = self.session.composer().attachments().len();
        match action {
            Action::Left | Action::Up => {
                self.selected_attachment = self.selected_attachment.saturating_sub(1);
            }
            Action::Right | Action::Down => {
                if self.selected_attachment + 1 < count {
                    self.selected_attachment += 1;
                }
            }
            Action::Backspace | Action::Delete => self.remove_selected_attachment(),
            Action::Submit | Action::Back => self.focus = Focus::Composer,
            Action::Input(_) => self.type_through(action),
            _ => {}
        }
    }

    fn handle_suggestions_action(&mut self, action: Action) {
        // Two-by-two grid, row-major.
        let index = self.selected_suggestion;
        match action {
            Action::Left if index % 2 == 1 => self.selected_suggestion -= 1,
            Action::Right if index % 2 == 0 && index + 1 < SUGGESTED_PROMPTS.len() => {
                self.selected_suggestion += 1;
            }
            Action::Up if index >= 2 => self.selected_suggestion -= 2,
            Action::Down if index + 2 < SUGGESTED_PROMPTS.len() => self.selected_suggestion += 2,
            Action::Submit => self.use_suggestion(self.selected_suggestion),
            Action::Back => self.focus = Focus::Composer,
            Action::Input(_) => self.type_through(action),
            _ => {}
        }
    }

    fn handle_sidebar_action(&mut self, action: Action) {
        match action {
            Action::Up => self.selected_nav = self.selected_nav.saturating_sub(1),
            Action::Down => {
                if self.selected_nav + 1 < NAV_ITEMS.len() {
                    self.selected_nav += 1;
                }
            }
            Action::Submit => {
                if let Some(item) = NAV_ITEMS.get(self.selected_nav) {
                    tracing::debug!(item, "Sidebar entry activated");
                    self.set_notification(format!("{item} is not available yet"));
                }
            }
            Action::Back => self.focus = Focus::Composer,
            Action::Input(_) => self.type_through(action),
            _ => {}
        }
    }

    fn handle_picker_action(&mut self, action: Action) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match action {
            Action::Input(c) => picker.input.insert(c),
            Action::Backspace => picker.input.backspace(),
            Action::Delete => picker.input.delete(),
            Action::Left => picker.input.move_left(),
            Action::Right => picker.input.move_right(),
            Action::Home => picker.input.move_home(),
            Action::End => picker.input.move_end(),
            Action::Submit => self.accept_picker(),
            // Dismissing the picker leaves the draft untouched
            Action::Back => self.picker = None,
            _ => {}
        }
    }

    /// Printable keys typed while another region is focused go to the draft.
    fn type_through(&mut self, action: Action) {
        self.focus = Focus::Composer;
        self.handle_composer_action(action);
    }

    fn sync_draft(&mut self) {
        self.session.composer_mut().set_text(self.input.content());
    }

    /// Send the composer contents.
    fn send(&mut self) {
        let outcome = self.session.send();
        if outcome.is_accepted() {
            self.input.clear();
            self.selected_attachment = 0;
            self.focus = Focus::Composer;
            self.sync_log();
        }
    }

    /// Put a suggested prompt in the draft.
    pub fn use_suggestion(&mut self, index: usize) {
        if let Some(prompt) = SUGGESTED_PROMPTS.get(index) {
            self.input.set(*prompt);
            self.sync_draft();
            self.focus = Focus::Composer;
        }
    }

    fn open_picker(&mut self, kind: MediaKind) {
        tracing::debug!(kind = kind.label(), "Opening file picker");
        self.picker = Some(FilePicker {
            kind,
            input: TextInputState::new(),
        });
    }

    fn accept_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        let result = pick_files(picker.input.content(), picker.kind);

        if let Some(first) = result.rejected.first() {
            let skipped = result.rejected.len();
            let noun = if skipped == 1 { "file" } else { "files" };
            self.set_notification(format!("Skipped {skipped} {noun}: {first}"));
        }

        if !result.accepted.is_empty() {
            self.session.composer_mut().add_attachments(result.accepted);
        }
        self.focus = Focus::Composer;
    }

    fn remove_selected_attachment(&mut self) {
        let composer = self.session.composer_mut();
        if composer.remove_attachment(self.selected_attachment).is_some() {
            let remaining = composer.attachments().len();
            self.selected_attachment = self.selected_attachment.min(remaining.saturating_sub(1));
        }
    }

    /// Regions that can take focus right now, in Tab order.
    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Composer];
        if !self.session.composer().attachments().is_empty() {
            order.push(Focus::Attachments);
        }
        if self.session.display_state() == DisplayState::Empty {
            order.push(Focus::Suggestions);
        }
        if self.layout().sidebar.is_some() {
            order.push(Focus::Sidebar);
        }
        order
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Fall back to the composer when the focused region went away.
    fn normalize_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Composer;
        }
    }

    /// Layout for the current terminal size and state.
    pub fn layout(&self) -> ChatLayout {
        let (width, height) = self.terminal_size;
        chat_layout(
            Rect::new(0, 0, width, height),
            self.sidebar.is_open(),
            self.session.display_state(),
            !self.session.composer().attachments().is_empty(),
        )
    }

    /// Number of transcript lines that do not fit in the viewport.
    pub fn max_scroll(&self) -> usize {
        let Some(area) = self.layout().transcript else {
            return 0;
        };
        let lines = transcript_lines(
            self.session.log().messages(),
            self.session.pending_replies(),
            area.width,
            &self.theme,
            &self.icons,
            self.tick_count,
        );
        lines.len().saturating_sub(usize::from(area.height))
    }

    fn page_size(&self) -> usize {
        self.layout()
            .transcript
            .map_or(1, |area| usize::from(area.height.saturating_sub(1)).max(1))
    }

    fn scroll_up(&mut self, lines: usize) {
        let max = self.max_scroll();
        self.scroll.follow = false;
        self.scroll.offset = self.scroll.offset.min(max).saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        let max = self.max_scroll();
        self.scroll.offset = (self.scroll.offset + lines).min(max);
        if self.scroll.offset >= max {
            self.scroll.follow = true;
        }
    }

    /// Re-arm follow mode whenever the log changed.
    fn sync_log(&mut self) {
        let revision = self.session.log().revision();
        if revision != self.scroll.seen_revision {
            self.scroll.seen_revision = revision;
            self.scroll.follow = true;
        }
    }

    /// Move half the remaining distance towards the newest line.
    fn ease_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll.offset > max {
            self.scroll.offset = max;
        }
        if self.scroll.follow && self.scroll.offset < max {
            let step = (max - self.scroll.offset).div_ceil(2);
            self.scroll.offset += step;
        }
    }

    /// Set a temporary notification message.
    fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        self.notification_ttl = NOTIFICATION_TTL;
    }

    /// Called on every tick: deliver replies, advance animations.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        // Clear notification after TTL expires
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }

        self.deliver_replies();
        self.ease_scroll();
        self.normalize_focus();
    }

    /// Append replies that have fired since the last call.
    pub fn deliver_replies(&mut self) {
        let delivered = self.session.poll_replies();
        if delivered > 0 {
            tracing::debug!(delivered, "Replies delivered");
        }
        self.sync_log();
    }

    /// Record a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.normalize_focus();
    }

    /// Drop outstanding replies before the view goes away.
    pub fn shutdown(&mut self) {
        self.session.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_engine::{FixedPicker, NoopFetch, Sender, CANNED_RESPONSES, DEFAULT_REPLY_DELAY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn app() -> App {
        let config = Config::default();
        let session = ChatSession::with_picker(DEFAULT_REPLY_DELAY, Arc::new(FixedPicker(1)));
        App::with_session(&config, session, Arc::new(NoopFetch))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_and_sending() {
        let mut app = app();
        type_text(&mut app, "Hello");
        assert_eq!(app.session().composer().text(), "Hello");

        app.handle_action(Action::Submit);
        assert!(app.input.is_empty());
        assert!(app.session().composer().is_empty());
        assert_eq!(app.session().log().len(), 1);
        assert_eq!(app.session().display_state(), DisplayState::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_is_ignored() {
        let mut app = app();
        type_text(&mut app, "   ");
        app.handle_action(Action::Submit);
        assert!(app.session().log().is_empty());
        assert_eq!(app.input.content(), "   ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_newline_in_draft() {
        let mut app = app();
        type_text(&mut app, "one");
        app.handle_action(Action::Newline);
        type_text(&mut app, "two");
        assert_eq!(app.session().composer().text(), "one\ntwo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_delivered_on_tick() {
        let mut app = app();
        type_text(&mut app, "Hello");
        app.handle_action(Action::Submit);

        app.tick();
        assert_eq!(app.session().log().len(), 1);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        app.tick();
        let log = app.session().log();
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[1].sender, Sender::Assistant);
        assert_eq!(log.messages()[1].text, CANNED_RESPONSES[1]);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut app = app();
        assert!(app.sidebar.is_open());
        app.handle_action(Action::ToggleSidebar);
        assert_eq!(app.sidebar, SidebarState::Closed);
        app.handle_action(Action::ToggleSidebar);
        assert!(app.sidebar.is_open());
    }

    #[test]
    fn test_closing_sidebar_moves_focus() {
        let mut app = app();
        app.focus = Focus::Sidebar;
        app.handle_action(Action::ToggleSidebar);
        assert_eq!(app.focus, Focus::Composer);
    }

    #[test]
    fn test_focus_cycle_on_empty_conversation() {
        let mut app = app();
        app.handle_action(Action::NextFocus);
        assert_eq!(app.focus, Focus::Suggestions);
        app.handle_action(Action::NextFocus);
        assert_eq!(app.focus, Focus::Sidebar);
        app.handle_action(Action::NextFocus);
        assert_eq!(app.focus, Focus::Composer);
        app.handle_action(Action::PrevFocus);
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn test_narrow_terminal_hides_sidebar_from_focus() {
        let mut app = app();
        app.resize(50, 24);
        app.handle_action(Action::NextFocus);
        app.handle_action(Action::NextFocus);
        assert_eq!(app.focus, Focus::Composer);
    }

    #[test]
    fn test_suggestion_fills_draft() {
        let mut app = app();
        app.focus = Focus::Suggestions;
        app.handle_action(Action::Right);
        app.handle_action(Action::Down);
        assert_eq!(app.selected_suggestion, 3);
        app.handle_action(Action::Submit);
        assert_eq!(app.input.content(), SUGGESTED_PROMPTS[3]);
        assert_eq!(app.session().composer().text(), SUGGESTED_PROMPTS[3]);
        assert_eq!(app.focus, Focus::Composer);
        assert!(app.session().log().is_empty());
    }

    #[test]
    fn test_typing_from_sidebar_goes_to_draft() {
        let mut app = app();
        app.focus = Focus::Sidebar;
        app.handle_action(Action::Input('h'));
        assert_eq!(app.focus, Focus::Composer);
        assert_eq!(app.input.content(), "h");
    }

    #[test]
    fn test_sidebar_entries_are_placeholders() {
        let mut app = app();
        app.focus = Focus::Sidebar;
        app.handle_action(Action::Down);
        app.handle_action(Action::Submit);
        assert_eq!(
            app.notification.as_deref(),
            Some("Explore is not available yet")
        );
        assert!(app.session().log().is_empty());
    }

    #[test]
    fn test_picker_accepts_matching_files() {
        let mut app = app();
        app.handle_action(Action::AttachImage);
        assert!(app.picker.is_some());
        type_text(&mut app, "a.png; notes.txt");
        app.handle_action(Action::Submit);

        assert!(app.picker.is_none());
        let attachments = app.session().composer().attachments();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].name, "a.png");
        let note = app.notification.as_deref().unwrap();
        assert!(note.starts_with("Skipped 1 file:"));
        assert!(note.contains("notes.txt"));
    }

    #[test]
    fn test_picker_cancel_is_noop() {
        let mut app = app();
        type_text(&mut app, "draft");
        app.handle_action(Action::AttachVideo);
        type_text(&mut app, "clip.mp4");
        app.handle_action(Action::Back);

        assert!(app.picker.is_none());
        assert!(app.session().composer().attachments().is_empty());
        assert_eq!(app.input.content(), "draft");
    }

    #[test]
    fn test_remove_attachment_chip() {
        let mut app = app();
        app.handle_action(Action::AttachImage);
        type_text(&mut app, "a.png;b.jpg");
        app.handle_action(Action::Submit);

        app.handle_action(Action::NextFocus);
        assert_eq!(app.focus, Focus::Attachments);
        app.handle_action(Action::Right);
        app.handle_action(Action::Delete);
        let attachments = app.session().composer().attachments();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].name, "a.png");
        assert_eq!(app.selected_attachment, 0);

        app.handle_action(Action::Delete);
        assert!(app.session().composer().attachments().is_empty());
        assert_eq!(app.focus, Focus::Composer);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attachment_only_send() {
        let mut app = app();
        app.handle_action(Action::AttachVideo);
        type_text(&mut app, "clip.mp4");
        app.handle_action(Action::Submit);
        app.handle_action(Action::Submit);

        let log = app.session().log();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].text, "");
        assert_eq!(log.messages()[0].attachments[0].name, "clip.mp4");
        assert!(app.session().composer().attachments().is_empty());
    }

    #[test]
    fn test_fetch_api_calls_hook_only() {
        struct Counting(AtomicUsize);
        impl FetchHook for Counting {
            fn fetch(&self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let hook = Arc::new(Counting(AtomicUsize::new(0)));
        let mut app = App::new(&Config::default(), hook.clone());
        type_text(&mut app, "keep");
        app.handle_action(Action::FetchApi);

        assert_eq!(hook.0.load(Ordering::SeqCst), 1);
        assert_eq!(app.input.content(), "keep");
        assert!(app.session().log().is_empty());
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        app.handle_action(Action::Help);
        assert!(app.show_help);
        app.handle_action(Action::Input('x'));
        assert!(!app.show_help);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_paste_into_draft_and_picker() {
        let mut app = app();
        app.focus = Focus::Sidebar;
        app.paste("line one\nline two");
        assert_eq!(app.focus, Focus::Composer);
        assert_eq!(app.session().composer().text(), "line one\nline two");

        app.handle_action(Action::AttachImage);
        app.paste("/tmp/a.png\n/tmp/b.gif");
        app.handle_action(Action::Submit);
        assert_eq!(app.session().composer().attachments().len(), 2);

        // Some terminals paste line breaks as a bare carriage return
        app.handle_action(Action::AttachImage);
        app.paste("/tmp/c.png\r/tmp/d.webp");
        app.handle_action(Action::Submit);
        let names: Vec<_> = app
            .session()
            .composer()
            .attachments()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["a.png", "b.gif", "c.png", "d.webp"]);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_action(Action::Help);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_follows_latest() {
        let mut app = app();
        for i in 0..10 {
            type_text(&mut app, &format!("message {i}"));
            app.handle_action(Action::Submit);
        }
        let max = app.max_scroll();
        assert!(max > 0);

        for _ in 0..12 {
            app.tick();
        }
        assert_eq!(app.scroll.offset, app.max_scroll());

        app.handle_action(Action::PageUp);
        assert!(!app.scroll.follow);
        let parked = app.scroll.offset;
        assert!(parked < app.max_scroll());
        app.tick();
        assert_eq!(app.scroll.offset, parked);

        type_text(&mut app, "one more");
        app.handle_action(Action::Submit);
        assert!(app.scroll.follow);
        for _ in 0..12 {
            app.tick();
        }
        assert_eq!(app.scroll.offset, app.max_scroll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_eases_in_steps() {
        let mut app = app();
        for i in 0..10 {
            type_text(&mut app, &format!("message {i}"));
            app.handle_action(Action::Submit);
        }
        let max = app.max_scroll();
        app.tick();
        assert!(app.scroll.offset > 0);
        if max > 1 {
            assert!(app.scroll.offset < max);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_replies() {
        let mut app = app();
        type_text(&mut app, "Hello");
        app.handle_action(Action::Submit);
        app.shutdown();

        tokio::time::sleep(Duration::from_secs(2)).await;
        app.tick();
        assert_eq!(app.session().log().len(), 1);
    }
}
