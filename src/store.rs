//! The loaded question set and the working view being presented.

use std::collections::HashSet;

use rand::Rng;

use crate::models::{Question, QuestionId};
use crate::shuffle;

/// Two views over one load: `all` is populated once and never reordered;
/// `active` is the sequence currently presented and is replaced wholesale
/// on shuffle and on entering or leaving review.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    all: Vec<Question>,
    active: Vec<Question>,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            active: questions.clone(),
            all: questions,
        }
    }

    /// The full post-load set, in load order.
    pub fn all(&self) -> &[Question] {
        &self.all
    }

    /// The sequence currently being presented.
    pub fn active(&self) -> &[Question] {
        &self.active
    }

    /// Replace the active view with a fresh random ordering of the full
    /// set, re-permuting each question's answer display order. The full
    /// set keeps its load-time order and permutations.
    pub fn reshuffle_active<R: Rng>(&mut self, rng: &mut R) {
        self.active = shuffle::permutation(rng, self.all.len())
            .into_iter()
            .map(|index| {
                let mut question = self.all[index].clone();
                question.display_order = shuffle::permutation(rng, question.answers.len());
                question
            })
            .collect();
    }

    /// Restrict the active view to questions whose id is in `ids`,
    /// preserving the full set's order and load-time permutations.
    pub fn restrict_to(&mut self, ids: &HashSet<QuestionId>) {
        self.active = self
            .all
            .iter()
            .filter(|question| ids.contains(&question.id))
            .cloned()
            .collect();
    }

    /// Restore the active view to the full post-load set.
    pub fn restore_all(&mut self) {
        self.active = self.all.clone();
    }
}
