//! Correctness and aggregate scoring over recorded answers.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Question;

/// Aggregate result over the active question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Answered positions whose selection was exactly right.
    pub correct: usize,
    /// Positions with a recorded answer.
    pub answered: usize,
    /// Length of the active set.
    pub total: usize,
}

impl Score {
    /// Correct share of the answered questions, rounded, 0 when nothing
    /// has been answered yet.
    pub fn accuracy_percent(&self) -> u32 {
        if self.answered == 0 {
            return 0;
        }
        ((self.correct as f64 / self.answered as f64) * 100.0).round() as u32
    }
}

/// Whether `selected` is exactly the set of correct answer indices.
///
/// Order-independent. A partial match on a multi-correct question scores
/// as fully incorrect; there is no partial credit.
pub fn is_correct(question: &Question, selected: &BTreeSet<usize>) -> bool {
    *selected == question.correct_indices()
}

/// Fold the recorded answers into a [`Score`].
///
/// Unanswered positions count toward neither `correct` nor `answered`.
pub fn aggregate(active: &[Question], recorded: &BTreeMap<usize, BTreeSet<usize>>) -> Score {
    let mut correct = 0;
    let mut answered = 0;

    for (&position, selected) in recorded {
        let Some(question) = active.get(position) else {
            continue;
        };
        answered += 1;
        if is_correct(question, selected) {
            correct += 1;
        }
    }

    Score {
        correct,
        answered,
        total: active.len(),
    }
}
