mod markup;
mod question_card_vm;
mod quiz_vm;
mod results_vm;

pub use markup::sanitize_html;
pub use question_card_vm::{AnswerButtonVm, QuestionCardVm, map_question_card};
pub use quiz_vm::{QuizIntent, QuizVm};
pub use results_vm::{ResultRowVm, ResultsVm, map_results};
