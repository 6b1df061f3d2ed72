#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod trivia;

pub use error::{FetchError, ProviderCode};
pub use quiz::{
    Advance, DEFAULT_QUESTION_COUNT, GamePhase, GameProgress, GameSession, QuizAnswerResult,
    QuizLoopService, StartTicket,
};
pub use trivia::{QuestionSource, TriviaClient, TriviaConfig};
