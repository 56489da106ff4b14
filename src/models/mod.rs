mod question;

pub use question::{Answer, Question, QuestionId};
