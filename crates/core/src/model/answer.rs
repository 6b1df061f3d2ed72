use serde::{Deserialize, Serialize};

use crate::model::QuizQuestion;

/// What the player chose for one question. Appended once, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    pub correct: bool,
    pub correct_answer: String,
}

impl AnswerRecord {
    /// Grade `chosen` against the question's correct answer.
    #[must_use]
    pub fn grade(question: &QuizQuestion, chosen: &str) -> Self {
        Self {
            question: question.text().to_string(),
            answer: chosen.to_string(),
            correct: question.is_correct(chosen),
            correct_answer: question.correct_answer().to_string(),
        }
    }
}
