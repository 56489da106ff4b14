use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use sha2::{Digest, Sha256};

/// One selectable answer of a question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

/// Stable identifier of a question within one loaded set.
///
/// Built from the load position and a digest of the full question text, so
/// it never changes across reshuffles and an unchanged file re-derives the
/// same ids on reload. Two questions only collide if they sit at the same
/// position with byte-identical text, which a single set cannot contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(String);

impl QuestionId {
    /// Hex characters of the text digest kept in the id.
    const DIGEST_CHARS: usize = 8;

    /// Derive the id for the question at `index` with the given text.
    pub fn derive(index: usize, text: &str) -> Self {
        let digest = hex::encode(Sha256::digest(text.as_bytes()));
        Self(format!("q{index:03}-{}", &digest[..Self::DIGEST_CHARS]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A prompt with its answers and the order they are shown in.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    /// Answers in source order. Selections and scoring use indices into
    /// this vector, never display positions.
    pub answers: Vec<Answer>,
    /// Permutation of `[0, answers.len())` giving the on-screen order.
    pub display_order: Vec<usize>,
}

impl Question {
    /// Indices of the answers marked correct.
    pub fn correct_indices(&self) -> BTreeSet<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.is_correct)
            .map(|(index, _)| index)
            .collect()
    }

    /// Answers in display order, each paired with its source index.
    pub fn displayed_answers(&self) -> impl Iterator<Item = (usize, &Answer)> {
        self.display_order
            .iter()
            .map(|&index| (index, &self.answers[index]))
    }
}
