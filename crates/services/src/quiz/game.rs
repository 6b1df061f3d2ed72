use std::fmt;

use tracing::{info, warn};

use quiz_core::model::{AnswerRecord, QuizQuestion, QuizSummary};

use super::progress::GameProgress;
use crate::error::FetchError;

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Nothing running: either before the first start or after the last question.
    GameOver,
    Loading,
    InProgress { answered: bool },
    /// Every question has an answer but the last one has not been advanced past.
    AllAnswered,
}

/// Result of calling [`GameSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Next(usize),
    /// The last question was left; the session is over.
    Finished,
    /// The current question has not been answered (or nothing is running).
    Ignored,
}

/// Issued by [`GameSession::begin_start`]; only the newest ticket may install questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTicket {
    generation: u64,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz session state, mutated only through `start`, `submit_answer` and `advance`.
///
/// Answering and moving on are separate steps so the UI can reveal the correct
/// answer before the player leaves the question.
#[derive(Clone)]
pub struct GameSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    score: usize,
    records: Vec<AnswerRecord>,
    loading: bool,
    game_over: bool,
    generation: u64,
    load_error: Option<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// An idle session. Starts out game-over so the UI offers "Start".
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            current: 0,
            score: 0,
            records: Vec::new(),
            loading: false,
            game_over: true,
            generation: 0,
            load_error: None,
        }
    }

    /// First half of `start()`: reset everything and enter `Loading`.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin_start(&mut self) -> StartTicket {
        self.generation = self.generation.wrapping_add(1);
        self.questions.clear();
        self.current = 0;
        self.score = 0;
        self.records.clear();
        self.loading = true;
        self.game_over = false;
        self.load_error = None;
        StartTicket {
            generation: self.generation,
        }
    }

    /// Second half of `start()`: install the fetched batch or fall back to
    /// a non-started state.
    ///
    /// Returns `false` when the ticket is stale and the result was dropped.
    pub fn finish_start(
        &mut self,
        ticket: StartTicket,
        result: Result<Vec<QuizQuestion>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.loading {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale question batch"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(questions) if !questions.is_empty() => {
                info!(count = questions.len(), "question batch installed");
                self.questions = questions;
            }
            Ok(_) => self.fail_start(&FetchError::EmptyBatch),
            Err(err) => self.fail_start(&err),
        }
        true
    }

    fn fail_start(&mut self, err: &FetchError) {
        warn!(error = %err, "failed to load questions");
        self.questions.clear();
        self.game_over = true;
        self.load_error = Some(err.to_string());
    }

    /// Record `chosen` for the current question.
    ///
    /// Ignored (returns `None`) while loading, after game over, or when the
    /// current question already has an answer.
    pub fn submit_answer(&mut self, chosen: &str) -> Option<&AnswerRecord> {
        if self.game_over || self.loading || self.records.len() != self.current {
            return None;
        }
        let question = self.questions.get(self.current)?;

        let record = AnswerRecord::grade(question, chosen);
        if record.correct {
            self.score += 1;
        }
        self.records.push(record);
        self.records.last()
    }

    /// Leave the current (answered) question.
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Ignored;
        }

        if self.current + 1 == self.questions.len() {
            self.game_over = true;
            info!(score = self.score, total = self.total(), "quiz finished");
            Advance::Finished
        } else {
            self.current += 1;
            Advance::Next(self.current)
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.loading {
            GamePhase::Loading
        } else if self.game_over {
            GamePhase::GameOver
        } else if self.all_answered() {
            GamePhase::AllAnswered
        } else {
            GamePhase::InProgress {
                answered: self.current_is_answered(),
            }
        }
    }

    /// The question to render, if there is one.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.loading {
            return None;
        }
        self.questions.get(self.current)
    }

    /// The answer given for the current question, if any.
    #[must_use]
    pub fn current_record(&self) -> Option<&AnswerRecord> {
        self.records.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based number of the current question.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Why the last start failed, if it did.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether a "Start" affordance makes sense right now.
    #[must_use]
    pub fn can_start(&self) -> bool {
        !self.loading && (self.game_over || self.all_answered())
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.game_over && !self.loading && self.current_is_answered()
    }

    /// True when the current question is the last one of the batch.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        GameProgress {
            total: self.total(),
            answered: self.records.len(),
            remaining: self.total().saturating_sub(self.records.len()),
            score: self.score,
            is_complete: self.all_answered(),
        }
    }

    /// End-of-quiz report, available once every question has been answered.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        if !self.all_answered() {
            return None;
        }
        QuizSummary::from_records(self.total(), self.records.clone()).ok()
    }

    fn current_is_answered(&self) -> bool {
        self.current < self.questions.len() && self.records.len() == self.current + 1
    }

    fn all_answered(&self) -> bool {
        !self.questions.is_empty() && self.records.len() == self.questions.len()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("records_len", &self.records.len())
            .field("loading", &self.loading)
            .field("game_over", &self.game_over)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
