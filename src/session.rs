//! Quiz session state.
//!
//! [`Session`] is the single mutation surface behind the UI: answer
//! toggling, checking, retrying, navigation, reshuffling and the review
//! loop all go through it. Each position is either *answering* (selection
//! open, nothing revealed) or *revealed* (a recorded answer is shown and
//! selection is locked). Every operation called outside its precondition
//! is a silent no-op, so callers never have to guard.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rand::Rng;

use crate::models::{Question, QuestionId};
use crate::scorer::{self, Score};
use crate::shuffle;
use crate::store::QuestionStore;

pub struct Session {
    store: QuestionStore,
    /// Position in the active set, always within its bounds.
    current: usize,
    /// Working selection at the current position (source answer indices).
    /// Lost on navigation unless checked first.
    selection: BTreeSet<usize>,
    /// Checked selections, keyed by active position. Cleared whenever the
    /// active view is replaced.
    recorded: BTreeMap<usize, BTreeSet<usize>>,
    /// Whether correctness is shown at the current position.
    revealed: bool,
    /// Ids answered incorrectly at least once. Survives reshuffles and
    /// review round-trips; only a full reset clears it.
    incorrect_ids: HashSet<QuestionId>,
    review_mode: bool,
}

impl Session {
    /// Start a session over a freshly loaded, non-empty question set.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            store: QuestionStore::new(questions),
            current: 0,
            selection: BTreeSet::new(),
            recorded: BTreeMap::new(),
            revealed: false,
            incorrect_ids: HashSet::new(),
            review_mode: false,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.store.active()[self.current]
    }

    /// Zero-based position in the active set.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Length of the active set.
    pub fn total(&self) -> usize {
        self.store.active().len()
    }

    /// The active sequence, for read-only presentation.
    pub fn active_questions(&self) -> &[Question] {
        self.store.active()
    }

    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn in_review(&self) -> bool {
        self.review_mode
    }

    /// Questions answered incorrectly at least once this session.
    pub fn incorrect_count(&self) -> usize {
        self.incorrect_ids.len()
    }

    /// Flip answer `index` in the working selection. No-op once the
    /// current position is revealed or when `index` is out of range.
    pub fn toggle_answer(&mut self, index: usize) {
        if self.revealed || index >= self.current_question().answers.len() {
            return;
        }
        if !self.selection.remove(&index) {
            self.selection.insert(index);
        }
    }

    /// Record the working selection at the current position and reveal
    /// correctness. No-op when already revealed or nothing is selected.
    /// An incorrect result adds the question's id to the incorrect set.
    pub fn check(&mut self) {
        if self.revealed || self.selection.is_empty() {
            return;
        }
        if !scorer::is_correct(self.current_question(), &self.selection) {
            let id = self.current_question().id.clone();
            self.incorrect_ids.insert(id);
        }
        self.recorded.insert(self.current, self.selection.clone());
        self.revealed = true;
    }

    /// Drop the recorded answer at the current position and go back to
    /// answering with an empty selection. No-op unless revealed. A prior
    /// incorrect attempt stays in the incorrect set.
    pub fn retry(&mut self) {
        if !self.revealed {
            return;
        }
        self.recorded.remove(&self.current);
        self.selection.clear();
        self.revealed = false;
    }

    /// Move to the next position; no-op at the end of the set.
    pub fn next(&mut self) {
        if self.current + 1 < self.total() {
            self.current += 1;
            self.restore_position();
        }
    }

    /// Move to the previous position; no-op at the start of the set.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.restore_position();
        }
    }

    /// Present the full set in a fresh random order with re-permuted
    /// answers. Clears recorded answers and leaves review mode; the
    /// incorrect set is kept.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.store.reshuffle_active(rng);
        self.review_mode = false;
        self.reset_position();
    }

    /// Restrict the active set to the questions answered incorrectly so
    /// far, in load order. No-op when none have been.
    pub fn enter_review(&mut self) {
        if self.incorrect_ids.is_empty() {
            return;
        }
        self.store.restrict_to(&self.incorrect_ids);
        self.review_mode = true;
        self.reset_position();
    }

    /// Return from review to the full post-load set. No-op outside review.
    pub fn exit_review(&mut self) {
        if !self.review_mode {
            return;
        }
        self.store.restore_all();
        self.review_mode = false;
        self.reset_position();
    }

    /// Start over as a reload of an unchanged file would: same questions
    /// and ids, fresh answer permutations, every piece of session state
    /// dropped — including the incorrect set and review mode.
    pub fn renew<R: Rng>(&mut self, rng: &mut R) {
        let questions = self
            .store
            .all()
            .iter()
            .map(|q| {
                let mut question = q.clone();
                question.display_order = shuffle::permutation(rng, question.answers.len());
                question
            })
            .collect();
        *self = Session::new(questions);
    }

    /// Aggregate score over the active set.
    pub fn score(&self) -> Score {
        scorer::aggregate(self.store.active(), &self.recorded)
    }

    /// Correctness of the current position, once revealed.
    pub fn current_verdict(&self) -> Option<bool> {
        self.revealed
            .then(|| scorer::is_correct(self.current_question(), &self.selection))
    }

    /// Correctness of the recorded answer at `position`, if any.
    pub fn position_result(&self, position: usize) -> Option<bool> {
        let selected = self.recorded.get(&position)?;
        let question = self.store.active().get(position)?;
        Some(scorer::is_correct(question, selected))
    }

    /// Restore selection and reveal state for the position just moved to.
    fn restore_position(&mut self) {
        match self.recorded.get(&self.current) {
            Some(saved) => {
                self.selection = saved.clone();
                self.revealed = true;
            }
            None => {
                self.selection.clear();
                self.revealed = false;
            }
        }
    }

    /// Reset after the active view has been replaced: recorded answers are
    /// keyed by position in the old view and cannot carry over.
    fn reset_position(&mut self) {
        self.current = 0;
        self.selection.clear();
        self.recorded.clear();
        self.revealed = false;
    }
}
