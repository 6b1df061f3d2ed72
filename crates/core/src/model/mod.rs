mod answer;
mod difficulty;
mod question;
mod summary;

pub use answer::AnswerRecord;
pub use difficulty::{Difficulty, DifficultyParseError};
pub use question::{Question, QuestionError, QuizQuestion};
pub use summary::{QuizSummary, SummaryError};
