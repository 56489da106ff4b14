use std::path::PathBuf;

use rand::Rng;

use crate::data::{self, LoadError};
use crate::models::Question;
use crate::session::Session;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Summary,
    /// A full reset failed to reload the question file.
    LoadFailed(String),
}

/// Presentation state wrapped around the quiz session: screen routing, the
/// highlighted answer row, summary scrolling, and the source path that full
/// resets reload from.
pub struct App {
    pub screen: Screen,
    session: Session,
    source: Option<PathBuf>,
    cursor: usize,
    summary_scroll: usize,
}

impl App {
    /// Load `source` and build the initial app state.
    pub fn load<R: Rng>(source: PathBuf, rng: &mut R) -> Result<Self, LoadError> {
        let questions = data::load_questions(&source, rng)?;
        Ok(Self::with_questions(questions, Some(source)))
    }

    /// Build the app over an already-loaded question set. Without a source
    /// path, full resets rebuild from the in-memory set instead of reading
    /// the file again.
    pub fn with_questions(questions: Vec<Question>, source: Option<PathBuf>) -> Self {
        Self {
            screen: Screen::Welcome,
            session: Session::new(questions),
            source,
            cursor: 0,
            summary_scroll: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Highlighted display row on the quiz screen.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn summary_scroll(&self) -> usize {
        self.summary_scroll
    }

    /// File name shown on the welcome screen, when loaded from disk.
    pub fn source_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn start(&mut self) {
        self.screen = Screen::Quiz;
    }

    pub fn cursor_up(&mut self) {
        let count = self.session.current_question().answers.len();
        self.cursor = (self.cursor + count - 1) % count;
    }

    pub fn cursor_down(&mut self) {
        let count = self.session.current_question().answers.len();
        self.cursor = (self.cursor + 1) % count;
    }

    /// Toggle the answer under the cursor, mapped through the display
    /// permutation to its source index.
    pub fn toggle_at_cursor(&mut self) {
        let index = self.session.current_question().display_order[self.cursor];
        self.session.toggle_answer(index);
    }

    pub fn check(&mut self) {
        self.session.check();
    }

    pub fn retry(&mut self) {
        self.session.retry();
    }

    pub fn next(&mut self) {
        self.session.next();
        self.cursor = 0;
    }

    pub fn previous(&mut self) {
        self.session.previous();
        self.cursor = 0;
    }

    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.session.reshuffle(rng);
        self.cursor = 0;
    }

    /// Enter review when incorrect answers exist, leave it when already
    /// reviewing. Silent no-op with nothing to review.
    pub fn toggle_review(&mut self) {
        if self.session.in_review() {
            self.session.exit_review();
        } else {
            self.session.enter_review();
        }
        self.cursor = 0;
    }

    /// Reload the question set and drop all session state, including the
    /// incorrect set and review mode. A failed reload parks the app on the
    /// error screen; the stale session stays untouched so a later retry can
    /// pick up where the reset left off.
    pub fn full_reset<R: Rng>(&mut self, rng: &mut R) {
        match &self.source {
            Some(path) => match data::load_questions(path, rng) {
                Ok(questions) => {
                    self.session = Session::new(questions);
                    self.screen = Screen::Quiz;
                }
                Err(err) => {
                    self.screen = Screen::LoadFailed(err.to_string());
                }
            },
            None => {
                self.session.renew(rng);
                self.screen = Screen::Quiz;
            }
        }
        self.cursor = 0;
        self.summary_scroll = 0;
    }

    pub fn open_summary(&mut self) {
        self.summary_scroll = 0;
        self.screen = Screen::Summary;
    }

    pub fn close_summary(&mut self) {
        self.screen = Screen::Quiz;
    }

    pub fn scroll_summary_down(&mut self) {
        let last = self.session.total().saturating_sub(1);
        self.summary_scroll = (self.summary_scroll + 1).min(last);
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, QuestionId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn permuted_question() -> Question {
        Question {
            id: QuestionId::derive(0, "permuted"),
            text: "permuted".to_string(),
            answers: vec![
                Answer {
                    text: "source 0 (correct)".to_string(),
                    is_correct: true,
                },
                Answer {
                    text: "source 1".to_string(),
                    is_correct: false,
                },
                Answer {
                    text: "source 2".to_string(),
                    is_correct: false,
                },
            ],
            display_order: vec![2, 0, 1],
        }
    }

    fn app() -> App {
        App::with_questions(vec![permuted_question()], None)
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut app = app();
        app.cursor_up();
        assert_eq!(app.cursor(), 2);
        app.cursor_down();
        assert_eq!(app.cursor(), 0);
        app.cursor_down();
        app.cursor_down();
        app.cursor_down();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_toggle_maps_display_row_to_source_index() {
        let mut app = app();
        // Row 0 shows source answer 2.
        app.toggle_at_cursor();
        assert!(app.session().selection().contains(&2));
        // Row 1 shows source answer 0; toggling twice leaves it out.
        app.cursor_down();
        app.toggle_at_cursor();
        app.toggle_at_cursor();
        assert!(!app.session().selection().contains(&0));
    }

    #[test]
    fn test_full_reset_without_source_renews_in_memory() {
        let mut app = app();
        let mut rng = StdRng::seed_from_u64(31);
        app.start();
        app.toggle_at_cursor(); // row 0 = source 2, incorrect
        app.check();
        assert_eq!(app.session().incorrect_count(), 1);

        app.full_reset(&mut rng);

        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.session().incorrect_count(), 0);
        assert_eq!(app.session().score().answered, 0);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_full_reset_with_missing_file_parks_on_error_screen() {
        let mut app = App::with_questions(
            vec![permuted_question()],
            Some(PathBuf::from("/nonexistent/questions.json")),
        );
        let mut rng = StdRng::seed_from_u64(37);
        app.start();
        app.toggle_at_cursor();
        app.check();

        app.full_reset(&mut rng);

        assert!(matches!(app.screen, Screen::LoadFailed(_)));
        // Stale session kept for a later retry.
        assert_eq!(app.session().score().answered, 1);
    }

    #[test]
    fn test_toggle_review_round_trip() {
        let mut app = app();
        app.toggle_at_cursor(); // row 0 = source 2, incorrect
        app.check();
        assert_eq!(app.session().incorrect_count(), 1);

        app.toggle_review();
        assert!(app.session().in_review());
        app.toggle_review();
        assert!(!app.session().in_review());
    }

    #[test]
    fn test_toggle_review_with_nothing_to_review() {
        let mut app = app();
        app.toggle_review();
        assert!(!app.session().in_review());
        assert_eq!(app.session().total(), 1);
    }

    #[test]
    fn test_summary_scroll_clamps() {
        let mut app = app();
        app.open_summary();
        assert_eq!(app.screen, Screen::Summary);
        app.scroll_summary_down();
        app.scroll_summary_down();
        assert_eq!(app.summary_scroll(), 0, "single question, nowhere to scroll");
        app.scroll_summary_up();
        assert_eq!(app.summary_scroll(), 0);
    }
}
