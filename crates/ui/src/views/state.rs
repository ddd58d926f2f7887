use dioxus::prelude::*;
use screening_core::model::FormError;
use services::{HandoffError, ScoringError, SubmitError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// A question has no answer and the form requires one.
    Unanswered,
    /// The form itself is malformed (missing field or control).
    Form,
    ScoringUnavailable,
    ScoringRejected,
    Storage,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unanswered => "Please answer every question before submitting.",
            ViewError::Form => "The screening form could not be read.",
            ViewError::ScoringUnavailable => {
                "The scoring service could not be reached. Please try again."
            }
            ViewError::ScoringRejected => "The scoring service returned an unexpected response.",
            ViewError::Storage => "Your answers could not be saved. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SubmitError> for ViewError {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::Form(FormError::Skipped(_)) => ViewError::Unanswered,
            SubmitError::Form(_) => ViewError::Form,
            SubmitError::Scoring(err) => ViewError::from(err),
            SubmitError::Handoff(err) => ViewError::from(err),
            _ => ViewError::Unknown,
        }
    }
}

impl From<&ScoringError> for ViewError {
    fn from(err: &ScoringError) -> Self {
        match err {
            ScoringError::HttpStatus(_) | ScoringError::InvalidJson(_) => {
                ViewError::ScoringRejected
            }
            _ => ViewError::ScoringUnavailable,
        }
    }
}

impl From<&HandoffError> for ViewError {
    fn from(_: &HandoffError) -> Self {
        ViewError::Storage
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
