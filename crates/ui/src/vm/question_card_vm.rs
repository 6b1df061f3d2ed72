use quiz_core::model::{AnswerRecord, QuizQuestion};

use super::markup::sanitize_html;

/// One answer button on the question card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    /// Raw answer text, sent back with the click.
    pub value: String,
    pub label_html: String,
    /// Set once the question is answered and this is the right answer.
    pub correct: bool,
    pub user_clicked: bool,
}

impl AnswerButtonVm {
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match (self.correct, self.user_clicked) {
            (true, _) => "answer answer--correct",
            (false, true) => "answer answer--wrong",
            (false, false) => "answer",
        }
    }
}

/// Everything the question card needs for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub number: usize,
    pub total: usize,
    pub question_html: String,
    pub answers: Vec<AnswerButtonVm>,
    pub answered: bool,
    pub correct_answer_html: Option<String>,
}

#[must_use]
pub fn map_question_card(
    question: &QuizQuestion,
    number: usize,
    total: usize,
    record: Option<&AnswerRecord>,
) -> QuestionCardVm {
    let answers = question
        .answers()
        .iter()
        .map(|answer| AnswerButtonVm {
            value: answer.clone(),
            label_html: sanitize_html(answer),
            correct: record.is_some_and(|r| r.correct_answer == *answer),
            user_clicked: record.is_some_and(|r| r.answer == *answer),
        })
        .collect();

    QuestionCardVm {
        number,
        total,
        question_html: sanitize_html(question.text()),
        answers,
        answered: record.is_some(),
        correct_answer_html: record.map(|r| sanitize_html(&r.correct_answer)),
    }
}
