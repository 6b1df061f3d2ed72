mod game;
mod progress;
mod workflow;

// Public API of the quiz subsystem.
pub use game::{Advance, GamePhase, GameSession, StartTicket};
pub use progress::GameProgress;
pub use workflow::{DEFAULT_QUESTION_COUNT, QuizAnswerResult, QuizLoopService};
