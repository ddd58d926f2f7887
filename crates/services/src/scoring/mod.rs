mod local;
mod remote;

use async_trait::async_trait;
use screening_core::model::{ScreeningPayload, ScreeningResult};

use crate::error::ScoringError;

pub use local::LocalScorer;
pub use remote::{DEFAULT_SCORING_URL, DEFAULT_TIMEOUT_SECS, RemoteScorer, ScoringConfig};

/// Turns a payload into a result for the dashboard.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// # Errors
    ///
    /// Returns `ScoringError` when the payload cannot be scored.
    async fn score(&self, payload: &ScreeningPayload) -> Result<ScreeningResult, ScoringError>;
}
