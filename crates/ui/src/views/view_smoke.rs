use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::prelude::{ReadableExt, WritableExt};
use screening_core::model::{
    Answer, Handoff, HandoffSlot, QuestionId, ScreeningPayload, ScreeningResult, SubmissionPhase,
};
use screening_core::scoring::score_screening;
use serde_json::json;
use services::{Scorer, ScoringError};
use storage::repository::HandoffRepository;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_remote_scoring,
    setup_view_harness_with_scorer,
};

struct UnreachableScorer;

#[async_trait]
impl Scorer for UnreachableScorer {
    async fn score(&self, _payload: &ScreeningPayload) -> Result<ScreeningResult, ScoringError> {
        Err(ScoringError::Timeout)
    }
}

#[derive(Default)]
struct CountingUnreachableScorer {
    calls: AtomicUsize,
}

#[async_trait]
impl Scorer for CountingUnreachableScorer {
    async fn score(&self, _payload: &ScreeningPayload) -> Result<ScreeningResult, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ScoringError::Timeout)
    }
}

fn answers(values: [i64; 6]) -> ScreeningPayload {
    ScreeningPayload::from_answers(values.map(Answer::Value))
}

#[tokio::test(flavor = "current_thread")]
async fn screening_view_smoke_renders_six_questions() {
    let mut harness = setup_view_harness(ViewKind::Screening);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("class=\"question\"").count(), 6, "{html}");
    assert!(html.contains("Question 1 of 6"), "missing progress in {html}");
    assert!(html.contains("Often"), "missing answer options in {html}");
    assert!(html.contains("See results"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn loading_view_smoke_renders_missing_answers() {
    let mut harness = setup_view_harness(ViewKind::Loading);
    harness.rebuild();
    let html = harness.render_until("No screening answers found").await;

    assert!(
        html.contains("No screening answers found"),
        "missing empty state in {html}"
    );
    assert!(html.contains("Start the screening"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn loading_view_smoke_keeps_answers_when_scoring_fails() {
    let mut harness =
        setup_view_harness_with_scorer(ViewKind::Loading, Arc::new(UnreachableScorer));
    harness
        .handoff
        .write(&Handoff::Payload(answers([2, 2, 0, 0, 1, 1])))
        .await
        .expect("write payload");

    harness.rebuild();
    let html = harness.render_until("could not be reached").await;

    assert!(html.contains("could not be reached"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    let stored = harness
        .storage
        .handoff
        .get(HandoffSlot::ScreeningData)
        .await
        .expect("read slot");
    assert!(stored.is_some());
    let result = harness
        .storage
        .handoff
        .get(HandoffSlot::ScreeningResult)
        .await
        .expect("read slot");
    assert!(result.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_report() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    let report = score_screening(&answers([2, 2, 2, 0, 0, 0]));
    harness
        .handoff
        .write(&Handoff::Result(ScreeningResult::from(&report)))
        .await
        .expect("write result");

    harness.rebuild();
    let html = harness.render_until("Observations").await;

    assert!(html.contains("Moderate likelihood"), "missing risk in {html}");
    assert!(html.contains("risk-moderate"), "missing risk class in {html}");
    assert!(html.contains("Next steps"), "missing next steps in {html}");
    assert!(html.contains("medical diagnosis"), "missing disclaimer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_raw_result() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness
        .handoff
        .write(&Handoff::Result(ScreeningResult::new(json!({"risk": "low"}))))
        .await
        .expect("write result");

    harness.rebuild();
    let html = harness.render_until("raw-result").await;

    assert!(html.contains("raw-result"), "missing raw block in {html}");
    assert!(html.contains("risk"), "missing raw content in {html}");
    assert!(html.contains("low"), "missing raw content in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    let html = harness.render_until("No screening results yet").await;

    assert!(
        html.contains("No screening results yet"),
        "missing empty state in {html}"
    );
    assert!(html.contains("Take the screening"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn screening_view_smoke_shows_inline_error_when_scoring_fails() {
    let scorer = Arc::new(CountingUnreachableScorer::default());
    let mut harness = setup_view_harness_with_remote_scoring(
        ViewKind::Screening,
        Arc::clone(&scorer) as Arc<dyn Scorer>,
    );
    harness.rebuild();

    let mut vm = harness.form_handles.vm();
    harness.dom.in_runtime(|| {
        vm.write().select(QuestionId::Q1, "2");
    });
    harness.submit_form();
    harness.submit_form();

    let html = harness.render_until("form-error").await;

    assert!(html.contains("form-error"), "missing inline error in {html}");
    assert!(html.contains("could not be reached"), "missing message in {html}");
    assert!(html.contains("See results"), "form not re-enabled in {html}");
    assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);
    let phase = harness.dom.in_runtime(|| vm.read().phase());
    assert_eq!(phase, SubmissionPhase::Failed);
    for slot in HandoffSlot::ALL {
        let stored = harness.storage.handoff.get(slot).await.expect("read slot");
        assert!(stored.is_none(), "{slot} was written");
    }
}
