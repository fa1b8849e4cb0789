use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::model::AppConfig;
use crate::ops::search::compile_pattern;
use crate::ops::{ListEvent, ListSession, Notice};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// A transient message in the status row
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires: Instant,
}

/// Main application state
pub struct App {
    pub session: ListSession,
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor row in the list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(session: ListSession, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            session,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            search_input: String::new(),
            last_search: None,
            toast: None,
        }
    }

    /// Send an event to the list and react to what it reports.
    pub fn dispatch(&mut self, event: ListEvent, now: Instant) {
        let notices = self.session.handle(event, now);
        self.apply_notices(notices, now);
    }

    /// Advance timers: the undo window and the toast.
    pub fn tick(&mut self, now: Instant) {
        let notices = self.session.tick(now);
        self.apply_notices(notices, now);
        if self.toast.as_ref().is_some_and(|t| now >= t.expires) {
            self.toast = None;
        }
    }

    fn apply_notices(&mut self, notices: Vec<Notice>, now: Instant) {
        for notice in notices {
            match notice {
                Notice::Toast { message } => {
                    self.toast = Some(Toast {
                        message,
                        expires: now + Duration::from_millis(self.config.ui.toast_ms),
                    });
                }
                Notice::ItemsChanged { .. } => self.clamp_cursor(),
                Notice::Reverted { position, .. } => self.cursor = position,
                _ => {}
            }
        }
    }

    /// Show a transient message in the status row.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires: Instant::now() + Duration::from_millis(self.config.ui.toast_ms),
        });
    }

    pub fn item_count(&self) -> usize {
        self.session.store().len()
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.item_count();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.item_count();
        if len == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    /// Keep the cursor row inside a viewport of `height` rows.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. In Navigate: compiles from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search => self.search_input.as_str(),
            Mode::Navigate => self.last_search.as_deref()?,
        };
        compile_pattern(pattern)
    }
}

/// Run the TUI application
pub fn run(session: ListSession, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(session, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Nothing stays revocable once the view is gone
    app.dispatch(ListEvent::Teardown, Instant::now());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
