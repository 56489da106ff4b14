//! Question loading.
//!
//! Questions come from a JSON file holding an ordered array of
//! `{ "question": ..., "answers": [{ "text": ..., "isCorrect": ... }] }`
//! objects. Loading is fail-fast: one malformed or invalid entry fails the
//! whole set; entries are never skipped individually.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::models::{Answer, Question, QuestionId};
use crate::shuffle;

/// Error loading questions from a file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// The file parsed but holds no questions.
    Empty,
    /// The question at `index` has no answer marked correct.
    NoCorrectAnswer { index: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read question file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question file: {}", e),
            LoadError::Empty => write!(f, "question file holds no questions"),
            LoadError::NoCorrectAnswer { index } => {
                write!(f, "question {} has no answer marked correct", index + 1)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// On-disk shape of one question entry.
#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    answers: Vec<Answer>,
}

/// Load, validate and id-stamp the question set at `path`.
///
/// Every entry gets a stable id derived from its position and text, and an
/// initial answer display permutation drawn from `rng`.
pub fn load_questions<P, R>(path: P, rng: &mut R) -> Result<Vec<Question>, LoadError>
where
    P: AsRef<Path>,
    R: Rng,
{
    let json = fs::read_to_string(path)?;
    let raw: Vec<RawQuestion> = serde_json::from_str(&json)?;

    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut questions = Vec::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        // Covers the zero-answer case too: no answers, nothing correct.
        if !entry.answers.iter().any(|a| a.is_correct) {
            return Err(LoadError::NoCorrectAnswer { index });
        }

        let display_order = shuffle::permutation(rng, entry.answers.len());
        questions.push(Question {
            id: QuestionId::derive(index, &entry.question),
            text: entry.question,
            answers: entry.answers,
            display_order,
        });
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    const VALID: &str = r#"[
        {
            "question": "Which planet is closest to the sun?",
            "answers": [
                { "text": "Mercury", "isCorrect": true },
                { "text": "Venus", "isCorrect": false },
                { "text": "Mars", "isCorrect": false }
            ]
        },
        {
            "question": "Which of these are primary colors in RGB?",
            "answers": [
                { "text": "Red", "isCorrect": true },
                { "text": "Green", "isCorrect": true },
                { "text": "Yellow", "isCorrect": false },
                { "text": "Blue", "isCorrect": true }
            ]
        }
    ]"#;

    fn write_temp(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    fn load(contents: &str) -> Result<Vec<Question>, LoadError> {
        let (_dir, path) = write_temp(contents);
        let mut rng = StdRng::seed_from_u64(1);
        load_questions(&path, &mut rng)
    }

    #[test]
    fn test_load_valid_file() {
        let questions = load(VALID).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].answers.len(), 3);
        assert_eq!(questions[1].answers.len(), 4);
        assert_ne!(questions[0].id, questions[1].id);
    }

    #[test]
    fn test_load_assigns_permutations() {
        let questions = load(VALID).unwrap();
        for question in &questions {
            let mut order = question.display_order.clone();
            order.sort_unstable();
            let expected: Vec<usize> = (0..question.answers.len()).collect();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn test_ids_stable_across_reloads() {
        let (_dir, path) = write_temp(VALID);
        let mut rng = StdRng::seed_from_u64(2);
        let first = load_questions(&path, &mut rng).unwrap();
        let second = load_questions(&path, &mut rng).unwrap();
        let first_ids: Vec<_> = first.iter().map(|q| q.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|q| q.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_missing_field_fails_whole_load() {
        // Second entry lacks "isCorrect"; nothing from the file survives.
        let json = r#"[
            {
                "question": "Fine",
                "answers": [{ "text": "yes", "isCorrect": true }]
            },
            {
                "question": "Broken",
                "answers": [{ "text": "no" }]
            }
        ]"#;
        assert!(matches!(load(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_not_an_array_is_parse_error() {
        assert!(matches!(
            load(r#"{ "question": "top level object" }"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(load("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_no_correct_answer_rejected() {
        let json = r#"[
            {
                "question": "Nothing is right",
                "answers": [
                    { "text": "a", "isCorrect": false },
                    { "text": "b", "isCorrect": false }
                ]
            }
        ]"#;
        match load(json) {
            Err(LoadError::NoCorrectAnswer { index }) => assert_eq!(index, 0),
            other => panic!("expected NoCorrectAnswer, got {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_path_is_io_error() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = load_questions("/nonexistent/questions.json", &mut rng);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
