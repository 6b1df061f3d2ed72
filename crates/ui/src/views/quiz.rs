#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{QuestionCard, ResultsPanel};
use crate::vm::{QuizIntent, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let vm = use_signal(QuizVm::new);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;

        match intent {
            QuizIntent::Start => {
                // Any fetch still in flight gets a stale ticket and is dropped on arrival.
                let ticket = vm.write().begin_start();
                let quiz_loop = quiz_loop.clone();
                spawn(async move {
                    let result = quiz_loop.fetch_batch().await;
                    vm.write().finish_start(ticket, result);
                });
            }
            QuizIntent::Answer(chosen) => {
                if !vm.write().answer(&chosen) {
                    tracing::debug!("answer ignored");
                }
            }
            QuizIntent::Next => {
                vm.write().advance();
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let vm_guard = vm.read();
    let show_start = vm_guard.show_start();
    let loading = vm_guard.is_loading();
    let score_label = vm_guard.score_label();
    let error_message = vm_guard.error_message();
    let card = vm_guard.question_card();
    let next_label = vm_guard.next_label();
    let results = vm_guard.results();
    drop(vm_guard);

    rsx! {
        div { class: "page quiz-page",
            h1 { "Trivia Quiz" }
            if show_start {
                button {
                    class: "start",
                    id: "quiz-start",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                    "Start"
                }
            }
            if let Some(label) = score_label {
                p { class: "score", "{label}" }
            }
            if loading {
                p { class: "loading", "Loading Questions ..." }
            }
            if let Some(message) = error_message {
                p { class: "quiz-error", role: "alert", "{message}" }
            }
            if let Some(card) = card {
                QuestionCard { card, on_intent: dispatch_intent }
            }
            if let Some(label) = next_label {
                button {
                    class: "next",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                    "{label}"
                }
            }
            if let Some(results) = results {
                ResultsPanel { results }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
