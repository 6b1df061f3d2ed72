use dioxus::prelude::*;

use crate::vm::ResultsVm;

/// Per-question breakdown shown once the last question is left.
#[component]
pub fn ResultsPanel(results: ResultsVm) -> Element {
    rsx! {
        section { class: "results",
            h2 { class: "results__headline", "{results.headline}" }
            p { class: "results__percent", "{results.percent_label}" }
            ol { class: "results__list",
                for row in results.rows {
                    li { key: "{row.number}", class: "{row.class_name}",
                        p { class: "result__question", dangerous_inner_html: "{row.question_html}" }
                        p { class: "result__answer",
                            "Your answer: "
                            span { dangerous_inner_html: "{row.answer_html}" }
                        }
                        if !row.correct {
                            p { class: "result__correct",
                                "Correct answer: "
                                span { dangerous_inner_html: "{row.correct_answer_html}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
