use std::sync::Arc;

use screening_core::model::{Handoff, HandoffSlot, ScreeningResult};
use tracing::info;

use crate::error::SubmitError;
use crate::handoff_service::HandoffService;
use crate::scoring::Scorer;

/// Scores answers left in `screeningData` by a local-only submission.
#[derive(Clone)]
pub struct PendingScoringService {
    handoff: Arc<HandoffService>,
    scorer: Arc<dyn Scorer>,
}

impl PendingScoringService {
    #[must_use]
    pub fn new(handoff: Arc<HandoffService>, scorer: Arc<dyn Scorer>) -> Self {
        Self { handoff, scorer }
    }

    /// Score the pending answers, store the result and clear the answers.
    ///
    /// Returns `Ok(None)` when nothing is waiting. On failure the pending
    /// answers stay in place so the page can retry.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Scoring` or `SubmitError::Handoff`.
    pub async fn score_pending(&self) -> Result<Option<ScreeningResult>, SubmitError> {
        let Some(payload) = self.handoff.load_payload().await? else {
            return Ok(None);
        };

        let result = self.scorer.score(&payload).await?;
        self.handoff.write(&Handoff::Result(result.clone())).await?;
        self.handoff.clear(HandoffSlot::ScreeningData).await?;
        info!("pending screening scored");

        Ok(Some(result))
    }
}
