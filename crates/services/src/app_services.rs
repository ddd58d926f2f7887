use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;

use crate::Clock;
use crate::error::AppServicesError;
use crate::handoff_service::HandoffService;
use crate::pending::PendingScoringService;
use crate::scoring::{LocalScorer, RemoteScorer, Scorer, ScoringConfig};
use crate::submission::{FormSubmissionHandler, SkippedAnswerPolicy, SubmissionStrategy};

/// Which submission strategy the form uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    Local,
    Remote,
}

impl StrategyKind {
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Knobs the composition root resolves from args and environment.
#[derive(Clone, Debug, Default)]
pub struct AppServicesConfig {
    pub strategy: StrategyKind,
    /// Endpoint for remote scoring. The loading page scores locally when unset.
    pub scoring: Option<ScoringConfig>,
    pub skipped_answers: SkippedAnswerPolicy,
}

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    handoff: Arc<HandoffService>,
    submission: Arc<FormSubmissionHandler>,
    pending: Arc<PendingScoringService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// configuration is unusable.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: AppServicesConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, config)
    }

    /// Build services over an existing storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::MissingScoringEndpoint` when the remote
    /// strategy has no endpoint, or `AppServicesError::Scoring` if the HTTP
    /// client cannot be built.
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        config: AppServicesConfig,
    ) -> Result<Self, AppServicesError> {
        let handoff = Arc::new(HandoffService::new(clock, Arc::clone(&storage.handoff)));

        let remote: Option<Arc<dyn Scorer>> = match config.scoring {
            Some(scoring) => Some(Arc::new(RemoteScorer::new(scoring)?)),
            None => None,
        };

        let strategy = match config.strategy {
            StrategyKind::Local => SubmissionStrategy::LocalOnly,
            StrategyKind::Remote => SubmissionStrategy::RemoteScored(
                remote
                    .clone()
                    .ok_or(AppServicesError::MissingScoringEndpoint)?,
            ),
        };
        info!(
            strategy = strategy.name(),
            skipped = ?config.skipped_answers,
            "submission services ready"
        );

        let submission = Arc::new(FormSubmissionHandler::new(
            strategy,
            config.skipped_answers,
            Arc::clone(&handoff),
        ));
        let pending_scorer = remote.unwrap_or_else(|| Arc::new(LocalScorer));
        let pending = Arc::new(PendingScoringService::new(
            Arc::clone(&handoff),
            pending_scorer,
        ));

        Ok(Self {
            handoff,
            submission,
            pending,
        })
    }

    #[must_use]
    pub fn handoff(&self) -> Arc<HandoffService> {
        Arc::clone(&self.handoff)
    }

    #[must_use]
    pub fn submission(&self) -> Arc<FormSubmissionHandler> {
        Arc::clone(&self.submission)
    }

    #[must_use]
    pub fn pending(&self) -> Arc<PendingScoringService> {
        Arc::clone(&self.pending)
    }
}
