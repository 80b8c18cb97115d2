//! # sdg16-explorer
//!
//! A terminal "single-page site" for SDG 16 (Peace, Justice and Strong
//! Institutions): tabbed content sections, a dark/light theme toggle, and
//! per-article knowledge-check quizzes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sdg16_explorer::{Site, SiteError};
//!
//! fn main() -> Result<(), SiteError> {
//!     // Built-in content, or Site::from_json("content.json")? for your own
//!     let site = Site::embedded()?;
//!
//!     // Take over the terminal until the user quits
//!     site.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod quiz;
pub mod terminal;
mod theme;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, ContactField, ContactForm};
pub use data::{load_content_from_json, load_embedded_content, LoadError};
pub use models::{Screen, Section, SiteContent};
pub use quiz::QuizBook;
pub use theme::Theme;

// Drives the loading bar and the contact confirmation countdown.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for site operations.
#[derive(Debug)]
pub enum SiteError {
    /// Error loading site content.
    Load(LoadError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl std::fmt::Display for SiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::Load(e) => write!(f, "Failed to load site content: {}", e),
            SiteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Load(e) => Some(e),
            SiteError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for SiteError {
    fn from(err: LoadError) -> Self {
        SiteError::Load(err)
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

/// A site instance that can be run in the terminal.
pub struct Site {
    app: App,
}

impl Site {
    /// Create a site from already-loaded content.
    pub fn new(content: SiteContent) -> Self {
        Self {
            app: App::new(content),
        }
    }

    /// Create a site from the content compiled into the binary.
    pub fn embedded() -> Result<Self, SiteError> {
        Ok(Self::new(load_embedded_content()?))
    }

    /// Load a site from a JSON content file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sdg16_explorer::Site;
    ///
    /// let site = Site::from_json("content.json").expect("Failed to load content");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, SiteError> {
        Ok(Self::new(load_content_from_json(path)?))
    }

    /// Start in dark mode instead of light mode.
    pub fn dark_mode(mut self, enabled: bool) -> Self {
        self.app.dark_mode = enabled;
        self
    }

    /// Run the site in the terminal.
    ///
    /// This takes over the terminal, shows the loading screen and then the
    /// tabbed site, and returns when the user quits.
    pub fn run(mut self) -> Result<(), SiteError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::SiteTerminal, app: &mut App) -> Result<(), SiteError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so cosmetic timers keep ticking while idle.
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        } else {
            app.on_tick();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Loading => handle_loading_input(app, key),
        Screen::Site => {
            if app.section == Section::Contact && app.contact.editing {
                handle_contact_editing_input(app, key)
            } else {
                handle_browse_input(app, key)
            }
        }
    }
}

fn handle_loading_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => {
            app.skip_loading();
            false
        }
    }
}

fn handle_browse_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_dark_mode(),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.previous_section(),
        KeyCode::Char(c @ '1'..='9') => {
            app.jump_to_section(c as usize - '1' as usize);
        }
        _ => handle_section_input(app, key),
    }
    false
}

fn handle_section_input(app: &mut App, key: KeyCode) {
    match app.section {
        Section::Faq => match key {
            KeyCode::Down | KeyCode::Char('j') => app.faq_next(),
            KeyCode::Up | KeyCode::Char('k') => app.faq_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_faq(),
            _ => {}
        },
        Section::Learn => match key {
            KeyCode::Down | KeyCode::Char('j') => app.option_down(),
            KeyCode::Up | KeyCode::Char('k') => app.option_up(),
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm_option(),
            KeyCode::Right | KeyCode::Char('n') => app.next_question(),
            KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
            KeyCode::Char('l') => app.next_article(),
            KeyCode::Char('h') => app.previous_article(),
            KeyCode::Char('s') => app.submit_quiz(),
            KeyCode::Char('r') => app.reset_quiz(),
            _ => {}
        },
        Section::Contact => match key {
            KeyCode::Enter | KeyCode::Char('i') => app.start_contact_edit(),
            _ => {}
        },
        _ => match key {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
            _ => {}
        },
    }
}

fn handle_contact_editing_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => app.stop_contact_edit(),
        KeyCode::Tab | KeyCode::Down => app.contact_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact_focus_previous(),
        KeyCode::Backspace => app.contact_backspace(),
        KeyCode::Enter => {
            if app.contact.focus == ContactField::Message {
                app.submit_contact();
            } else {
                app.contact_focus_next();
            }
        }
        KeyCode::Char(c) => app.contact_input(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_app() -> App {
        let mut app = App::new(load_embedded_content().unwrap());
        app.skip_loading();
        app
    }

    #[test]
    fn test_quit_from_browse() {
        let mut app = site_app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_loading_skips_on_any_key() {
        let mut app = App::new(load_embedded_content().unwrap());
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.screen, Screen::Site);
    }

    #[test]
    fn test_digit_jumps_to_section() {
        let mut app = site_app();
        handle_input(&mut app, KeyCode::Char('5'));
        assert_eq!(app.section, Section::Learn);
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut app = site_app();
        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.section, Section::Overview);
        handle_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn test_learn_keys_drive_quiz() {
        let mut app = site_app();
        handle_input(&mut app, KeyCode::Char('5'));
        handle_input(&mut app, KeyCode::Char('j'));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.quizzes.answer("article1", 0), Some(1));

        for _ in 0..3 {
            handle_input(&mut app, KeyCode::Enter);
        }
        handle_input(&mut app, KeyCode::Char('s'));
        assert!(app.quizzes.is_revealed("article1"));

        // Frozen: selection keys no longer change recorded answers.
        handle_input(&mut app, KeyCode::Char('j'));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.quizzes.answer("article1", 0), Some(1));

        handle_input(&mut app, KeyCode::Char('r'));
        assert!(!app.quizzes.is_revealed("article1"));
        assert_eq!(app.quizzes.answered_count("article1"), 0);
    }

    #[test]
    fn test_contact_editing_captures_text_keys() {
        let mut app = site_app();
        handle_input(&mut app, KeyCode::Char('9'));
        assert_eq!(app.section, Section::Contact);
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.contact.editing);

        // 'q' and 't' are text while editing, not global shortcuts.
        assert!(!handle_input(&mut app, KeyCode::Char('q')));
        handle_input(&mut app, KeyCode::Char('t'));
        assert_eq!(app.contact.name, "qt");
        assert!(!app.dark_mode);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.contact.editing);
    }
}
