use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use pagewire_core::motion::{Clock, SystemClock};
use pagewire_core::{AppConfig, PageCommand, PageEvent, PageRuntime};
use tracing::{debug, warn};

use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Events kept for the event log panel
const EVENT_LOG_LEN: usize = 50;

/// Page component the cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tabs,
    Faq,
    Modals,
    Video,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Tabs, Focus::Faq, Focus::Modals, Focus::Video];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Tabs => "Tabs",
            Focus::Faq => "FAQ",
            Focus::Modals => "Modals",
            Focus::Video => "Video",
        }
    }
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Application state
pub struct App {
    pub runtime: PageRuntime,
    clock: Box<dyn Clock>,
    pub keymap: Keymap,
    pub theme: Theme,
    pub focus: Focus,
    pub mode: Mode,
    /// Cursor per focus, indexed like `Focus::ORDER`
    cursors: [usize; 4],
    scroll_step: f64,
    pub should_quit: bool,
    pub status_message: Option<String>,
    events: VecDeque<PageEvent>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_clock(config, Box::new(SystemClock::new()))
    }

    /// Build the app on an explicit page clock
    pub fn with_clock(config: &AppConfig, clock: Box<dyn Clock>) -> Result<Self> {
        let runtime = PageRuntime::from_config(config, clock.now())?;
        Ok(Self {
            runtime,
            clock,
            keymap: Keymap::from_config(&config.keymap),
            theme: load_theme(&config.ui.theme),
            focus: Focus::Tabs,
            mode: Mode::Normal,
            cursors: [0; 4],
            scroll_step: config.motion.scroll.scroll_step,
            should_quit: false,
            status_message: None,
            events: VecDeque::with_capacity(EVENT_LOG_LEN),
        })
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Advance the page to the current clock time
    pub fn tick(&mut self) {
        let now = self.now();
        for event in self.runtime.tick(now) {
            debug!(?event, "Page event");
            if self.events.len() == EVENT_LOG_LEN {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
    }

    /// Most recent page events, oldest first
    pub fn recent_events(&self) -> impl DoubleEndedIterator<Item = &PageEvent> {
        self.events.iter()
    }

    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }

    /// Send a command to the page; failures end up in the status bar
    pub fn dispatch(&mut self, command: PageCommand) {
        let now = self.now();
        if let Err(e) = self.runtime.dispatch(command, now) {
            warn!("Page command failed: {}", e);
            self.set_status(e.to_string());
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.focus.position()]
    }

    /// Cursor position within the given focus
    pub fn cursor_in(&self, focus: Focus) -> usize {
        self.cursors[focus.position()]
    }

    fn item_count(&self, focus: Focus) -> usize {
        match focus {
            Focus::Tabs => self.runtime.tab_groups().iter().map(|g| g.len()).sum(),
            Focus::Faq => self.runtime.accordion().len(),
            Focus::Modals => self.runtime.modals().modals().len(),
            Focus::Video => self.runtime.videos().len(),
        }
    }

    /// Group and item index of the tab under the cursor
    pub fn tab_target(&self) -> Option<(usize, usize)> {
        let mut cursor = self.cursor_in(Focus::Tabs);
        for (group, tabs) in self.runtime.tab_groups().iter().enumerate() {
            if cursor < tabs.len() {
                return Some((group, cursor));
            }
            cursor -= tabs.len();
        }
        None
    }

    fn cycle_focus(&mut self, step: usize) {
        let len = Focus::ORDER.len();
        let mut position = self.focus.position();
        // Skip components the page does not have
        for _ in 0..len {
            position = (position + step) % len;
            if self.item_count(Focus::ORDER[position]) > 0 {
                break;
            }
        }
        self.focus = Focus::ORDER[position];
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(Focus::ORDER.len() - 1);
    }

    pub fn move_down(&mut self) {
        let count = self.item_count(self.focus);
        let cursor = &mut self.cursors[self.focus.position()];
        if *cursor + 1 < count {
            *cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        let cursor = &mut self.cursors[self.focus.position()];
        *cursor = cursor.saturating_sub(1);
    }

    /// Activate whatever the cursor points at
    pub fn select(&mut self) {
        let cursor = self.cursor();
        let command = match self.focus {
            Focus::Tabs => self
                .tab_target()
                .map(|(group, index)| PageCommand::ClickTab { group, index }),
            Focus::Faq => Some(PageCommand::ToggleFaq { index: cursor }),
            Focus::Modals => self
                .runtime
                .modals()
                .modals()
                .get(cursor)
                .map(|m| PageCommand::OpenModal { name: m.name.clone() }),
            Focus::Video => self.runtime.videos().get(cursor).map(|video| {
                if video.is_playing() {
                    PageCommand::PauseVideo { index: cursor }
                } else {
                    PageCommand::PlayVideo { index: cursor }
                }
            }),
        };

        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    pub fn close(&mut self) {
        if self.runtime.modals().open_name().is_some() {
            self.dispatch(PageCommand::CloseModal);
        }
    }

    pub fn scroll_down(&mut self) {
        self.dispatch(PageCommand::ScrollBy {
            delta: self.scroll_step,
        });
    }

    pub fn scroll_up(&mut self) {
        self.dispatch(PageCommand::ScrollBy {
            delta: -self.scroll_step,
        });
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pagewire_core::motion::ManualClock;
    use pagewire_core::{SwitchCause, TabEvent};

    use crate::input::{handle_key_event, Action};

    fn app() -> (App, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new());
        let app = App::with_clock(&AppConfig::default(), Box::new(Rc::clone(&clock))).unwrap();
        (app, clock)
    }

    #[test]
    fn test_focus_cycles_through_components() {
        let (mut app, _) = app();
        assert_eq!(app.focus, Focus::Tabs);
        app.focus_next();
        assert_eq!(app.focus, Focus::Faq);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus, Focus::Video);
        app.focus_next();
        assert_eq!(app.focus, Focus::Tabs);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Video);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (mut app, _) = app();
        app.move_up();
        assert_eq!(app.cursor(), 0);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.cursor(), 2);
        assert_eq!(app.tab_target(), Some((0, 2)));
    }

    #[test]
    fn test_select_tab_clicks_it() {
        let (mut app, clock) = app();
        app.tick();

        clock.set(Duration::from_millis(2000));
        app.move_down();
        app.select();
        app.tick();

        let clicked = app.recent_events().any(|e| {
            matches!(
                e,
                PageEvent::Tab {
                    event: TabEvent::SwitchStarted {
                        to: 1,
                        cause: SwitchCause::UserClick,
                        ..
                    },
                    ..
                }
            )
        });
        assert!(clicked);
        assert_eq!(app.runtime.tab_groups()[0].marked_index(), Some(1));
    }

    #[test]
    fn test_select_faq_and_modal() {
        let (mut app, clock) = app();
        clock.set(Duration::from_millis(4000));
        app.tick();

        app.focus_next();
        app.select();
        assert_eq!(app.runtime.accordion().open_index(), Some(0));

        app.focus_next();
        app.move_down();
        app.select();
        assert_eq!(app.runtime.modals().open_name(), Some("newsletter"));
        assert!(app.runtime.is_scroll_locked());

        app.close();
        clock.set(Duration::from_millis(5000));
        app.tick();
        assert_eq!(app.runtime.modals().open_name(), None);
        assert!(!app.runtime.is_scroll_locked());
    }

    #[test]
    fn test_scroll_is_ignored_while_loading() {
        let (mut app, clock) = app();
        clock.set(Duration::from_millis(1000));
        app.scroll_down();
        app.tick();
        assert!(app
            .recent_events()
            .any(|e| matches!(e, PageEvent::ScrollIgnored { .. })));

        clock.set(Duration::from_millis(4000));
        app.tick();
        app.scroll_down();
        // Scroll animation starts on the next frame
        app.tick();
        clock.set(Duration::from_millis(5000));
        app.tick();
        assert_eq!(app.runtime.scroll_y(), 120.0);
    }

    #[test]
    fn test_failed_command_sets_status() {
        let (mut app, _) = app();
        app.dispatch(PageCommand::ToggleFaq { index: 42 });
        assert!(app.status_message.is_some());
        app.clear_status();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let (mut app, _) = app();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &app), Action::Quit);

        app.toggle_help();
        assert_eq!(app.mode, Mode::Help);
        assert_eq!(handle_key_event(key, &app), Action::ExitMode);
    }
}
