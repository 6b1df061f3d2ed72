use dioxus::prelude::*;

use crate::vm::{AnswerButtonVm, QuestionCardVm, QuizIntent};

#[component]
pub fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let answered = card.answered;

    rsx! {
        section { class: "question-card",
            p { class: "question-card__number", "Question: {card.number} / {card.total}" }
            p { class: "question-card__text", dangerous_inner_html: "{card.question_html}" }
            div { class: "question-card__answers",
                for (idx, answer) in card.answers.into_iter().enumerate() {
                    AnswerButton {
                        key: "{idx}",
                        answer,
                        disabled: answered,
                        on_intent,
                    }
                }
            }
            if let Some(correct_html) = card.correct_answer_html {
                h2 { class: "question-card__reveal",
                    "Correct Answer: "
                    span { dangerous_inner_html: "{correct_html}" }
                }
            }
        }
    }
}

#[component]
fn AnswerButton(
    answer: AnswerButtonVm,
    disabled: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class_name = answer.class_name();
    let value = answer.value.clone();

    rsx! {
        button {
            class: "{class_name}",
            r#type: "button",
            disabled,
            onclick: move |_| on_intent.call(QuizIntent::Answer(value.clone())),
            span { dangerous_inner_html: "{answer.label_html}" }
        }
    }
}
