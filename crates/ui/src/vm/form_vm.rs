use screening_core::model::{
    FormError, FormSource, FormValues, Progress, ProgressTracker, QuestionId, SubmissionPhase,
};

use crate::views::ViewError;

/// Select options offered for every question, as `(value, label)`.
pub const ANSWER_OPTIONS: [(&str, &str); 4] = [
    ("", "Select an answer"),
    ("0", "Rarely"),
    ("1", "Sometimes"),
    ("2", "Often"),
];

/// State behind the screening form: current selections, the progress
/// display and the submission phase.
#[derive(Clone, Debug, PartialEq)]
pub struct FormVm {
    values: FormValues,
    tracker: ProgressTracker,
    phase: SubmissionPhase,
    error: Option<ViewError>,
}

impl FormVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: FormValues::from_values(["", "", "", "", "", ""]),
            tracker: ProgressTracker::standard(),
            phase: SubmissionPhase::Idle,
            error: None,
        }
    }

    /// Bind the form to its rendered question rows.
    ///
    /// Each row yields the control it holds, or `None` when it has none.
    /// Every bound control starts unanswered.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingControl` for the first row without a
    /// control.
    pub fn attach<I>(rows: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = Option<QuestionId>>,
    {
        let tracker = ProgressTracker::attach(rows)?;
        let mut values = FormValues::new();
        for question in tracker.bound_controls() {
            values.set(*question, "");
        }
        Ok(Self {
            values,
            tracker,
            phase: SubmissionPhase::Idle,
            error: None,
        })
    }

    /// Controls in display order.
    #[must_use]
    pub fn rows(&self) -> &[QuestionId] {
        self.tracker.bound_controls()
    }

    /// Record a new selection and move the progress display to it.
    pub fn select(&mut self, question: QuestionId, value: impl Into<String>) -> Progress {
        self.values.set(question, value);
        if !self.phase.is_in_flight() {
            self.phase = SubmissionPhase::Collecting;
            self.error = None;
        }
        self.tracker.on_change(question)
    }

    #[must_use]
    pub fn value(&self, question: QuestionId) -> String {
        self.values.field_value(question).unwrap_or_default()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        QuestionId::ALL
            .into_iter()
            .filter(|id| !self.value(*id).trim().is_empty())
            .count()
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: SubmissionPhase) {
        self.phase = phase;
    }

    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.error
    }

    /// Start a submission, returning a snapshot of the answers.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        if self.phase.is_in_flight() {
            return None;
        }
        self.phase = SubmissionPhase::Submitted;
        self.error = None;
        Some(self.values.clone())
    }

    pub fn fail(&mut self, error: ViewError) {
        self.phase = SubmissionPhase::Failed;
        self.error = Some(error);
    }
}

impl Default for FormVm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSource for FormVm {
    fn field_value(&self, question: QuestionId) -> Option<String> {
        self.values.field_value(question)
    }
}
