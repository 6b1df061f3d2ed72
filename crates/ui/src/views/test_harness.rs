use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Difficulty, Question, QuizQuestion};
use services::{FetchError, QuestionSource, QuizLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

/// Hands out queued batches in order; an empty queue fails the fetch.
#[derive(Default)]
pub struct QueuedSource {
    batches: Mutex<VecDeque<Result<Vec<Question>, FetchError>>>,
}

impl QueuedSource {
    pub fn push(&self, batch: Result<Vec<Question>, FetchError>) {
        self.batches.lock().unwrap().push_back(batch);
    }
}

#[async_trait]
impl QuestionSource for QueuedSource {
    async fn fetch_questions(
        &self,
        _amount: u32,
        _difficulty: Difficulty,
    ) -> Result<Vec<QuizQuestion>, FetchError> {
        let next = self.batches.lock().unwrap().pop_front();
        match next {
            Some(Ok(questions)) => questions
                .into_iter()
                .map(|q| QuizQuestion::from_question(q).map_err(FetchError::from))
                .collect(),
            Some(Err(err)) => Err(err),
            None => Err(FetchError::EmptyBatch),
        }
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct QuizViewHarness {
    pub dom: VirtualDom,
    pub source: Arc<QueuedSource>,
    handles: QuizTestHandles,
}

impl QuizViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Lets spawned fetches resolve and re-renders.
    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness() -> QuizViewHarness {
    let source = Arc::new(QueuedSource::default());
    let quiz_loop = Arc::new(QuizLoopService::new(
        Arc::clone(&source) as Arc<dyn QuestionSource>
    ));
    let app = Arc::new(TestApp { quiz_loop });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    QuizViewHarness {
        dom,
        source,
        handles,
    }
}
