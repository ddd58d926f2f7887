use std::fmt;
use std::sync::Arc;

use screening_core::model::{
    FormSource, Handoff, HandoffSlot, Navigation, ScreeningPayload, SubmissionPhase,
};
use tracing::{info, warn};

use crate::error::SubmitError;
use crate::handoff_service::HandoffService;
use crate::scoring::Scorer;

/// What happens to the answers after they are collected.
#[derive(Clone)]
pub enum SubmissionStrategy {
    /// Store the answers and move on to the loading page.
    LocalOnly,
    /// Score the answers first, store the result and open the dashboard.
    RemoteScored(Arc<dyn Scorer>),
}

impl SubmissionStrategy {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionStrategy::LocalOnly => "local",
            SubmissionStrategy::RemoteScored(_) => "remote",
        }
    }
}

impl fmt::Debug for SubmissionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubmissionStrategy({})", self.name())
    }
}

/// How unanswered (non-numeric) questions are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkippedAnswerPolicy {
    /// Send the question as JSON `null`.
    #[default]
    PassThrough,
    /// Refuse to submit until every question is answered.
    Reject,
}

/// Result of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub payload: ScreeningPayload,
    pub slot: HandoffSlot,
    pub navigation: Navigation,
}

/// Collects the screening answers, optionally scores them and hands them
/// to the next page.
///
/// A failed submission writes nothing and navigates nowhere; the caller
/// keeps the form open and shows the error.
#[derive(Clone)]
pub struct FormSubmissionHandler {
    strategy: SubmissionStrategy,
    skipped_answers: SkippedAnswerPolicy,
    handoff: Arc<HandoffService>,
}

impl FormSubmissionHandler {
    #[must_use]
    pub fn new(
        strategy: SubmissionStrategy,
        skipped_answers: SkippedAnswerPolicy,
        handoff: Arc<HandoffService>,
    ) -> Self {
        Self {
            strategy,
            skipped_answers,
            handoff,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> &SubmissionStrategy {
        &self.strategy
    }

    #[must_use]
    pub fn skipped_answers(&self) -> SkippedAnswerPolicy {
        self.skipped_answers
    }

    /// Submit the form.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Form` when a field is missing or, under
    /// `SkippedAnswerPolicy::Reject`, unanswered. Returns
    /// `SubmitError::Scoring` when the scorer fails and
    /// `SubmitError::Handoff` when the handoff cannot be stored.
    pub async fn submit(&self, form: &dyn FormSource) -> Result<SubmissionOutcome, SubmitError> {
        self.submit_observed(form, |_| {}).await
    }

    /// Like [`FormSubmissionHandler::submit`], reporting each phase the
    /// submission enters to `observe`.
    ///
    /// # Errors
    ///
    /// See [`FormSubmissionHandler::submit`]. `observe` sees
    /// `SubmissionPhase::Failed` before the error is returned.
    pub async fn submit_observed<F>(
        &self,
        form: &dyn FormSource,
        mut observe: F,
    ) -> Result<SubmissionOutcome, SubmitError>
    where
        F: FnMut(SubmissionPhase),
    {
        observe(SubmissionPhase::Submitted);
        let outcome = self.run(form, &mut observe).await;
        match &outcome {
            Ok(done) => {
                observe(SubmissionPhase::Persisted);
                info!(
                    strategy = self.strategy.name(),
                    slot = %done.slot,
                    target = done.navigation.href(),
                    "screening submitted"
                );
            }
            Err(err) => {
                observe(SubmissionPhase::Failed);
                warn!(strategy = self.strategy.name(), "screening submission failed: {err}");
            }
        }
        outcome
    }

    async fn run<F>(
        &self,
        form: &dyn FormSource,
        observe: &mut F,
    ) -> Result<SubmissionOutcome, SubmitError>
    where
        F: FnMut(SubmissionPhase),
    {
        let payload = ScreeningPayload::collect(form)?;
        if self.skipped_answers == SkippedAnswerPolicy::Reject {
            payload.require_complete()?;
        }

        match &self.strategy {
            SubmissionStrategy::LocalOnly => {
                self.handoff.write(&Handoff::Payload(payload)).await?;
                Ok(SubmissionOutcome {
                    payload,
                    slot: HandoffSlot::ScreeningData,
                    navigation: Navigation::Loading,
                })
            }
            SubmissionStrategy::RemoteScored(scorer) => {
                observe(SubmissionPhase::Scoring);
                let result = scorer.score(&payload).await?;
                self.handoff.write(&Handoff::Result(result)).await?;
                Ok(SubmissionOutcome {
                    payload,
                    slot: HandoffSlot::ScreeningResult,
                    navigation: Navigation::Dashboard,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use screening_core::model::{FormError, FormValues, QuestionId, ScreeningResult};
    use screening_core::time::fixed_clock;
    use serde_json::json;
    use storage::repository::{HandoffRepository, InMemoryRepository};

    use crate::error::ScoringError;

    struct FixedScorer;

    #[async_trait]
    impl Scorer for FixedScorer {
        async fn score(
            &self,
            _payload: &ScreeningPayload,
        ) -> Result<ScreeningResult, ScoringError> {
            Ok(ScreeningResult::new(json!({"risk": "low"})))
        }
    }

    struct DownScorer;

    #[async_trait]
    impl Scorer for DownScorer {
        async fn score(
            &self,
            _payload: &ScreeningPayload,
        ) -> Result<ScreeningResult, ScoringError> {
            Err(ScoringError::Timeout)
        }
    }

    fn handler(
        strategy: SubmissionStrategy,
        policy: SkippedAnswerPolicy,
    ) -> (FormSubmissionHandler, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let handoff = Arc::new(HandoffService::new(fixed_clock(), Arc::new(repo.clone())));
        (FormSubmissionHandler::new(strategy, policy, handoff), repo)
    }

    #[tokio::test]
    async fn local_submission_reports_phases() {
        let (handler, _) = handler(SubmissionStrategy::LocalOnly, SkippedAnswerPolicy::default());
        let form = FormValues::from_values(["0", "1", "2", "0", "1", "2"]);
        let mut phases = Vec::new();

        let outcome = handler
            .submit_observed(&form, |phase| phases.push(phase))
            .await
            .unwrap();

        assert_eq!(outcome.navigation, Navigation::Loading);
        assert_eq!(
            phases,
            vec![SubmissionPhase::Submitted, SubmissionPhase::Persisted]
        );
    }

    #[tokio::test]
    async fn remote_submission_enters_scoring_phase() {
        let (handler, repo) = handler(
            SubmissionStrategy::RemoteScored(Arc::new(FixedScorer)),
            SkippedAnswerPolicy::default(),
        );
        let form = FormValues::from_values(["2", "2", "2", "2", "2", "2"]);
        let mut phases = Vec::new();

        let outcome = handler
            .submit_observed(&form, |phase| phases.push(phase))
            .await
            .unwrap();

        assert_eq!(outcome.navigation, Navigation::Dashboard);
        assert_eq!(
            phases,
            vec![
                SubmissionPhase::Submitted,
                SubmissionPhase::Scoring,
                SubmissionPhase::Persisted
            ]
        );
        assert!(repo.get(HandoffSlot::ScreeningData).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn scoring_failure_writes_nothing() {
        let (handler, repo) = handler(
            SubmissionStrategy::RemoteScored(Arc::new(DownScorer)),
            SkippedAnswerPolicy::default(),
        );
        let form = FormValues::from_values(["1", "1", "1", "1", "1", "1"]);
        let mut phases = Vec::new();

        let err = handler
            .submit_observed(&form, |phase| phases.push(phase))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Scoring(ScoringError::Timeout)));
        assert_eq!(phases.last(), Some(&SubmissionPhase::Failed));
        for slot in HandoffSlot::ALL {
            assert!(repo.get(slot).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn reject_policy_blocks_skipped_answers() {
        let (handler, repo) = handler(SubmissionStrategy::LocalOnly, SkippedAnswerPolicy::Reject);
        let form = FormValues::from_values(["1", "1", "", "1", "1", "1"]);

        let err = handler.submit(&form).await.unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Form(FormError::Skipped(QuestionId::Q3))
        ));
        assert!(repo.get(HandoffSlot::ScreeningData).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_field_is_reported_before_side_effects() {
        let (handler, repo) = handler(SubmissionStrategy::LocalOnly, SkippedAnswerPolicy::default());
        let mut form = FormValues::from_values(["1", "1", "1", "1", "1", "1"]);
        form.remove(QuestionId::Q6);

        let err = handler.submit(&form).await.unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Form(FormError::MissingField(QuestionId::Q6))
        ));
        assert!(repo.get(HandoffSlot::ScreeningData).await.unwrap().is_none());
    }
}
