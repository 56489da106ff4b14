//! # requiz
//!
//! A terminal-based multiple-choice quiz presenter.
//!
//! Questions load from a JSON file, answers come up in a fresh random
//! order, multi-select answers score all-or-nothing, and every question
//! answered incorrectly lands in a review loop that can be replayed until
//! the set is clean.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use requiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod scorer;
mod session;
mod shuffle;
mod store;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::thread_rng;

pub use app::{App, Screen};
pub use data::{LoadError, load_questions};
pub use models::{Answer, Question, QuestionId};
pub use scorer::Score;
pub use session::Session;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from an already-loaded question set.
    ///
    /// Without a backing file, a full reset rebuilds from this set in
    /// memory instead of reloading from disk.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions, None),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use requiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let app = App::load(PathBuf::from(path.as_ref()), &mut thread_rng())?;
        Ok(Self { app })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::Tui::enter()?;
        run_event_loop(&mut term, &mut self.app)
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

fn run_event_loop(terminal: &mut terminal::Tui, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Summary => handle_summary_input(app, key),
        Screen::LoadFailed(_) => handle_load_failed_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor_down();
            false
        }
        KeyCode::Char(' ') => {
            app.toggle_at_cursor();
            false
        }
        KeyCode::Enter => {
            app.check();
            false
        }
        KeyCode::Char('r') => {
            app.retry();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next();
            false
        }
        KeyCode::Char('s') => {
            app.reshuffle(&mut thread_rng());
            false
        }
        KeyCode::Char('v') => {
            app.toggle_review();
            false
        }
        KeyCode::Tab => {
            app.open_summary();
            false
        }
        KeyCode::Char('R') => {
            app.full_reset(&mut thread_rng());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_summary_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_summary_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_summary_up();
            false
        }
        KeyCode::Tab => {
            app.close_summary();
            false
        }
        KeyCode::Char('R') => {
            app.full_reset(&mut thread_rng());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_load_failed_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.full_reset(&mut thread_rng());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
