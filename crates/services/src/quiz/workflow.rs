use std::fmt;
use std::sync::Arc;

use tracing::debug;

use quiz_core::model::{AnswerRecord, Difficulty, QuizQuestion};

use super::game::{Advance, GameSession};
use crate::error::FetchError;
use crate::trivia::QuestionSource;

/// Questions per session unless configured otherwise.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub record: AnswerRecord,
    pub score: usize,
    pub is_last: bool,
}

/// Orchestrates quiz start (fetch + install) and answering.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn QuestionSource>,
    amount: u32,
    difficulty: Difficulty,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            amount: DEFAULT_QUESTION_COUNT,
            difficulty: Difficulty::Easy,
        }
    }

    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Fetch one batch with the configured amount and difficulty.
    ///
    /// # Errors
    ///
    /// Propagates `FetchError` from the question source. No retry is attempted.
    pub async fn fetch_batch(&self) -> Result<Vec<QuizQuestion>, FetchError> {
        debug!(amount = self.amount, difficulty = %self.difficulty, "fetching question batch");
        self.source
            .fetch_questions(self.amount, self.difficulty)
            .await
    }

    /// Run the full `start()` transition on `session`.
    ///
    /// Failures are recorded on the session rather than returned. Returns
    /// `false` if a newer start superseded this one.
    pub async fn start(&self, session: &mut GameSession) -> bool {
        let ticket = session.begin_start();
        let result = self.fetch_batch().await;
        session.finish_start(ticket, result)
    }

    /// Answer the current question. `None` when the answer was not accepted.
    pub fn answer_current(
        &self,
        session: &mut GameSession,
        chosen: &str,
    ) -> Option<QuizAnswerResult> {
        let record = session.submit_answer(chosen)?.clone();
        debug!(correct = record.correct, score = session.score(), "answer recorded");
        Some(QuizAnswerResult {
            record,
            score: session.score(),
            is_last: session.is_last_question(),
        })
    }

    /// Move past the current question.
    pub fn advance(&self, session: &mut GameSession) -> Advance {
        session.advance()
    }
}

impl fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("amount", &self.amount)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}
