use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use screening_core::time::fixed_clock;
use services::{
    FormSubmissionHandler, HandoffService, LocalScorer, PendingScoringService, Scorer,
    SkippedAnswerPolicy, SubmissionStrategy,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::screening::FormTestHandles;
use crate::views::{DashboardView, LoadingView, ScreeningFormView};

#[derive(Clone)]
struct TestApp {
    submission: Arc<FormSubmissionHandler>,
    handoff: Arc<HandoffService>,
    pending: Arc<PendingScoringService>,
}

impl UiApp for TestApp {
    fn submission(&self) -> Arc<FormSubmissionHandler> {
        Arc::clone(&self.submission)
    }

    fn handoff(&self) -> Arc<HandoffService> {
        Arc::clone(&self.handoff)
    }

    fn pending(&self) -> Arc<PendingScoringService> {
        Arc::clone(&self.pending)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Screening,
    Loading,
    Dashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    form_handles: FormTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.form_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Screening => rsx! { ScreeningFormView {} },
        ViewKind::Loading => rsx! { LoadingView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub handoff: Arc<HandoffService>,
    pub form_handles: FormTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Submit the screening form the way its submit button does.
    pub fn submit_form(&self) {
        let submit = self.form_handles.submit();
        self.dom.in_runtime(|| submit.call(()));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Drive pending tasks until the rendered HTML contains `needle`.
    pub async fn render_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_scorer(view, Arc::new(LocalScorer))
}

pub fn setup_view_harness_with_scorer(view: ViewKind, scorer: Arc<dyn Scorer>) -> ViewHarness {
    build_harness(view, SubmissionStrategy::LocalOnly, scorer)
}

/// Harness whose form scores every submission with `scorer` first.
pub fn setup_view_harness_with_remote_scoring(
    view: ViewKind,
    scorer: Arc<dyn Scorer>,
) -> ViewHarness {
    build_harness(
        view,
        SubmissionStrategy::RemoteScored(Arc::clone(&scorer)),
        scorer,
    )
}

fn build_harness(
    view: ViewKind,
    strategy: SubmissionStrategy,
    scorer: Arc<dyn Scorer>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let handoff = Arc::new(HandoffService::new(
        fixed_clock(),
        Arc::clone(&storage.handoff),
    ));
    let submission = Arc::new(FormSubmissionHandler::new(
        strategy,
        SkippedAnswerPolicy::PassThrough,
        Arc::clone(&handoff),
    ));
    let pending = Arc::new(PendingScoringService::new(Arc::clone(&handoff), scorer));

    let app = Arc::new(TestApp {
        submission,
        handoff: Arc::clone(&handoff),
        pending,
    });

    let form_handles = FormTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            form_handles: form_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        handoff,
        form_handles,
    }
}
