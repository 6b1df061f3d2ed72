use dioxus::prelude::*;
use quiz_core::model::Question;
use services::FetchError;

use super::QuestionCard;
use super::test_harness::setup_quiz_harness;
use crate::vm::{AnswerButtonVm, QuestionCardVm, QuizIntent};

fn two_questions() -> Vec<Question> {
    vec![
        Question::multiple("Capital of France?", "Paris", ["Rome"]),
        Question::multiple("2 + 2?", "4", ["5"]),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn idle_quiz_renders_start_only() {
    let mut harness = setup_quiz_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Trivia Quiz"), "missing title in {html}");
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert!(!html.contains("Score:"), "unexpected score in {html}");
    assert!(!html.contains("Question:"), "unexpected card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_loads_first_question() {
    let mut harness = setup_quiz_harness();
    harness.source.push(Ok(two_questions()));
    harness.rebuild();

    harness.send(QuizIntent::Start);
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Question: 1 / 2"), "missing counter in {html}");
    assert!(html.contains("Capital of France?"), "missing question in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("quiz-start"), "start should hide mid-quiz in {html}");
    assert!(!html.contains("Correct Answer:"), "answer revealed early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_reveals_and_advances_to_results() {
    let mut harness = setup_quiz_harness();
    harness.source.push(Ok(two_questions()));
    harness.rebuild();
    harness.send(QuizIntent::Start);
    harness.drive_async().await;

    harness.send(QuizIntent::Answer("Paris".to_string()));
    let html = harness.render();
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Correct Answer:"), "missing reveal in {html}");
    assert!(html.contains("answer--correct"), "missing highlight in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");

    harness.send(QuizIntent::Next);
    harness.send(QuizIntent::Answer("5".to_string()));
    let html = harness.render();
    assert!(html.contains("Question: 2 / 2"), "missing counter in {html}");
    assert!(html.contains("answer--wrong"), "missing wrong highlight in {html}");
    assert!(html.contains("See Results"), "missing results button in {html}");
    assert!(html.contains("quiz-start"), "start should show when all answered in {html}");

    harness.send(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("You scored 1 / 2"), "missing headline in {html}");
    assert!(html.contains("50% correct"), "missing percent in {html}");
    assert!(!html.contains("Score:"), "score should hide after game over in {html}");
    assert!(!html.contains("Question:"), "card should hide after game over in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_start_shows_error_and_start() {
    let mut harness = setup_quiz_harness();
    harness.source.push(Err(FetchError::InvalidAmount));
    harness.rebuild();

    harness.send(QuizIntent::Start);
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Could not load questions"), "missing error in {html}");
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert!(!html.contains("Question:"), "unexpected card in {html}");
}

#[component]
fn CardHarness() -> Element {
    let card = QuestionCardVm {
        number: 3,
        total: 10,
        question_html: "Who wrote <em>Hamlet</em>?".to_string(),
        answers: vec![
            AnswerButtonVm {
                value: "Shakespeare".to_string(),
                label_html: "Shakespeare".to_string(),
                correct: true,
                user_clicked: false,
            },
            AnswerButtonVm {
                value: "Marlowe".to_string(),
                label_html: "Marlowe".to_string(),
                correct: false,
                user_clicked: true,
            },
        ],
        answered: true,
        correct_answer_html: Some("Shakespeare".to_string()),
    };
    rsx! {
        QuestionCard { card, on_intent: move |_| {} }
    }
}

#[test]
fn question_card_renders_answered_state() {
    let mut dom = VirtualDom::new(CardHarness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Question: 3 / 10"), "missing counter in {html}");
    assert!(html.contains("<em>Hamlet</em>"), "missing markup in {html}");
    assert!(html.contains("answer answer--correct"), "missing correct class in {html}");
    assert!(html.contains("answer answer--wrong"), "missing wrong class in {html}");
    assert!(html.contains("disabled"), "answers should be disabled in {html}");
    assert!(html.contains("Correct Answer:"), "missing reveal in {html}");
}

#[component]
fn RepeatedAnswersHarness() -> Element {
    let button = |value: &str, correct: bool| AnswerButtonVm {
        value: value.to_string(),
        label_html: value.to_string(),
        correct,
        user_clicked: false,
    };
    let card = QuestionCardVm {
        number: 1,
        total: 1,
        question_html: "Pick one".to_string(),
        answers: vec![button("Same", false), button("Same", false), button("Right", true)],
        answered: false,
        correct_answer_html: None,
    };
    rsx! {
        QuestionCard { card, on_intent: move |_| {} }
    }
}

#[test]
fn question_card_keeps_repeated_answers() {
    let mut dom = VirtualDom::new(RepeatedAnswersHarness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("Same").count(), 2, "repeated answer dropped in {html}");
    assert_eq!(html.matches("<button").count(), 3, "expected three buttons in {html}");
}
