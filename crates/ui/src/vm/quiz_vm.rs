use quiz_core::model::QuizQuestion;
use services::{Advance, FetchError, GameSession, StartTicket};

use super::question_card_vm::{QuestionCardVm, map_question_card};
use super::results_vm::{ResultsVm, map_results};

/// User actions the quiz page forwards into the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer(String),
    Next,
}

/// Read side of a [`GameSession`] shaped for rendering.
///
/// All mutation goes through the three session transitions.
#[derive(Debug, Default)]
pub struct QuizVm {
    session: GameSession,
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_start(&mut self) -> StartTicket {
        self.session.begin_start()
    }

    pub fn finish_start(
        &mut self,
        ticket: StartTicket,
        result: Result<Vec<QuizQuestion>, FetchError>,
    ) -> bool {
        self.session.finish_start(ticket, result)
    }

    /// Returns `true` when the answer was recorded.
    pub fn answer(&mut self, chosen: &str) -> bool {
        self.session.submit_answer(chosen).is_some()
    }

    pub fn advance(&mut self) -> Advance {
        self.session.advance()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    #[must_use]
    pub fn show_start(&self) -> bool {
        self.session.can_start()
    }

    #[must_use]
    pub fn score_label(&self) -> Option<String> {
        (!self.session.is_game_over()).then(|| format!("Score: {}", self.session.score()))
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.session
            .load_error()
            .map(|err| format!("Could not load questions: {err}"))
    }

    /// Label for the button that leaves the current question, once it is answered.
    #[must_use]
    pub fn next_label(&self) -> Option<&'static str> {
        if !self.session.can_advance() {
            return None;
        }
        Some(if self.session.is_last_question() {
            "See Results"
        } else {
            "Next Question"
        })
    }

    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        if self.session.is_game_over() {
            return None;
        }
        let question = self.session.current_question()?;
        Some(map_question_card(
            question,
            self.session.question_number(),
            self.session.total(),
            self.session.current_record(),
        ))
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        if !self.session.is_game_over() {
            return None;
        }
        self.session.summary().as_ref().map(map_results)
    }
}
