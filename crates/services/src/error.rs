//! Shared error types for the services crate.

use thiserror::Error;

use screening_core::model::{FormError, HandoffSlot};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by scorers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("invalid scoring endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("scoring request timed out")]
    Timeout,
    #[error("scoring endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("scoring endpoint returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ScoringError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// Errors emitted by `HandoffService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HandoffError {
    #[error("handoff slot {slot} holds unreadable data: {reason}")]
    Corrupt { slot: HandoffSlot, reason: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while submitting the screening form or scoring a
/// pending submission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("remote scoring needs a scoring endpoint")]
    MissingScoringEndpoint,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
