mod question_card;
mod quiz;
mod results;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use question_card::QuestionCard;
pub use quiz::QuizView;
pub use results::ResultsPanel;
