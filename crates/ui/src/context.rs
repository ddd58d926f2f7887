use std::sync::Arc;

use services::{FormSubmissionHandler, HandoffService, PendingScoringService};

pub trait UiApp: Send + Sync {
    fn submission(&self) -> Arc<FormSubmissionHandler>;
    fn handoff(&self) -> Arc<HandoffService>;
    fn pending(&self) -> Arc<PendingScoringService>;
}

#[derive(Clone)]
pub struct AppContext {
    submission: Arc<FormSubmissionHandler>,
    handoff: Arc<HandoffService>,
    pending: Arc<PendingScoringService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            submission: app.submission(),
            handoff: app.handoff(),
            pending: app.pending(),
        }
    }

    #[must_use]
    pub fn submission(&self) -> Arc<FormSubmissionHandler> {
        Arc::clone(&self.submission)
    }

    #[must_use]
    pub fn handoff(&self) -> Arc<HandoffService> {
        Arc::clone(&self.handoff)
    }

    #[must_use]
    pub fn pending(&self) -> Arc<PendingScoringService> {
        Arc::clone(&self.pending)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
