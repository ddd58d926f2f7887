use async_trait::async_trait;
use screening_core::model::{ScreeningPayload, ScreeningResult};
use screening_core::scoring::score_screening;

use super::Scorer;
use crate::error::ScoringError;

/// Scores in-process with the bundled rules. Used when no endpoint is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalScorer;

#[async_trait]
impl Scorer for LocalScorer {
    async fn score(&self, payload: &ScreeningPayload) -> Result<ScreeningResult, ScoringError> {
        let report = score_screening(payload);
        tracing::debug!(score = report.score, risk = %report.risk_level, "scored locally");
        Ok(ScreeningResult::from(&report))
    }
}
