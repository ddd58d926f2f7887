#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod handoff_service;
pub mod pending;
pub mod scoring;
pub mod submission;

pub use screening_core::Clock;

pub use app_services::{AppServices, AppServicesConfig, StrategyKind};
pub use error::{AppServicesError, HandoffError, ScoringError, SubmitError};
pub use handoff_service::HandoffService;
pub use pending::PendingScoringService;
pub use scoring::{
    DEFAULT_SCORING_URL, DEFAULT_TIMEOUT_SECS, LocalScorer, RemoteScorer, Scorer, ScoringConfig,
};
pub use submission::{
    FormSubmissionHandler, SkippedAnswerPolicy, SubmissionOutcome, SubmissionStrategy,
};
