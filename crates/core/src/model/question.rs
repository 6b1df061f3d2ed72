use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shuffle::shuffled_with;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("correct answer is empty")]
    MissingCorrectAnswer,

    #[error("correct answer {answer:?} is also listed as incorrect")]
    AmbiguousAnswer { answer: String },
}

//
// ─── RAW QUESTION ─────────────────────────────────────────────────────────────
//

/// A question exactly as the trivia provider returns it.
///
/// Text fields may carry HTML entities or inline markup. They are kept
/// verbatim here; rendering code is responsible for sanitizing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub category: String,
    pub correct_answer: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    pub question: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Question {
    /// Build a multiple-choice question with empty category/difficulty.
    #[must_use]
    pub fn multiple(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            category: String::new(),
            correct_answer: correct_answer.into(),
            difficulty: String::new(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
            question: question.into(),
            kind: "multiple".to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuestionError` when the text or correct answer is blank, or when the
    /// correct answer also appears among the incorrect ones (scoring compares by text).
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.correct_answer.trim().is_empty() {
            return Err(QuestionError::MissingCorrectAnswer);
        }
        if self.incorrect_answers.contains(&self.correct_answer) {
            return Err(QuestionError::AmbiguousAnswer {
                answer: self.correct_answer.clone(),
            });
        }
        Ok(())
    }
}

//
// ─── QUESTION WITH ANSWERS ────────────────────────────────────────────────────
//

/// A validated question together with its answer list, shuffled once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question: Question,
    answers: Vec<String>,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// See [`Question::validate`].
    pub fn from_question(question: Question) -> Result<Self, QuestionError> {
        Self::from_question_with(question, &mut rand::rng())
    }

    /// Same as [`QuizQuestion::from_question`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// See [`Question::validate`].
    pub fn from_question_with<R: Rng + ?Sized>(
        question: Question,
        rng: &mut R,
    ) -> Result<Self, QuestionError> {
        question.validate()?;

        let mut pool = question.incorrect_answers.clone();
        pool.push(question.correct_answer.clone());
        let answers = shuffled_with(&pool, rng);

        Ok(Self { question, answers })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.question.question
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.question.correct_answer
    }

    /// Incorrect answers plus the correct one, in display order.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn is_correct(&self, chosen: &str) -> bool {
        self.question.correct_answer == chosen
    }
}
