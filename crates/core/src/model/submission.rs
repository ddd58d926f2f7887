/// Lifecycle of one form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// At least one answer changed.
    Collecting,
    Submitted,
    /// Waiting on the scoring endpoint.
    Scoring,
    Persisted,
    Navigated,
    /// Submission stopped before any handoff was written.
    Failed,
}

impl SubmissionPhase {
    /// True while a submission is underway and another must not start.
    #[must_use]
    pub fn is_in_flight(self) -> bool {
        matches!(
            self,
            SubmissionPhase::Submitted | SubmissionPhase::Scoring | SubmissionPhase::Persisted
        )
    }
}

/// Page to open once a submission has been handed off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Loading,
    Dashboard,
}

impl Navigation {
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Navigation::Loading => "loading.html",
            Navigation::Dashboard => "dashboard.html",
        }
    }
}
