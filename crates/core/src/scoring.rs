//! Screening-level scoring rules.
//!
//! Every question answered with [`CONCERN_ANSWER`] adds [`CONCERN_POINTS`]
//! and contributes its observation. The total maps onto a risk level with
//! fixed, non-diagnostic guidance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Answer, QuestionId, ScreeningPayload};

/// Answer value that marks a question as a concern.
pub const CONCERN_ANSWER: i64 = 2;
/// Points added per concern.
pub const CONCERN_POINTS: u32 = 2;

/// Highest score still rated `Low`.
const LOW_MAX: u32 = 3;
/// Highest score still rated `Moderate`.
const MODERATE_MAX: u32 = 7;

pub const DISCLAIMER: &str = "This screening highlights patterns commonly monitored in early development. \
It does not provide a medical diagnosis.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score <= LOW_MAX {
            RiskLevel::Low
        } else if score <= MODERATE_MAX {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    #[must_use]
    pub fn next_steps(self) -> [&'static str; 3] {
        match self {
            RiskLevel::Low => [
                "Continue observing your child\u{2019}s development during everyday activities.",
                "Encourage communication, play, and social interaction at a comfortable pace.",
                "If questions arise, discussing them with a pediatric professional can be helpful.",
            ],
            RiskLevel::Moderate => [
                "Consider noting patterns or behaviors you observe over time.",
                "You may find it helpful to discuss these observations with a pediatric professional.",
                "Early conversations can provide clarity and reassurance.",
            ],
            RiskLevel::High => [
                "Consider sharing these observations with a qualified healthcare or developmental professional.",
                "Early guidance can help families better understand and support their child\u{2019}s needs.",
                "Seeking professional input does not imply a diagnosis, but can offer valuable insight.",
            ],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Neutral observation recorded when `question` is flagged.
#[must_use]
pub fn observation(question: QuestionId) -> &'static str {
    match question {
        QuestionId::Q1 => {
            "Inconsistent response to name can influence shared attention and early social engagement."
        }
        QuestionId::Q2 => {
            "Reduced eye contact may affect non-verbal communication cues during interaction."
        }
        QuestionId::Q3 => {
            "Limited use of gestures can impact early communication and expression of needs."
        }
        QuestionId::Q4 => {
            "Repetitive behaviors are often monitored as part of developmental observation."
        }
        QuestionId::Q5 => {
            "Strong sensory reactions may influence comfort and interaction with the environment."
        }
        QuestionId::Q6 => {
            "Limited imaginative play can affect social role exploration and flexible thinking."
        }
    }
}

/// Scored summary of one screening.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReport {
    pub score: u32,
    pub risk_level: RiskLevel,
    pub observations: Vec<String>,
    pub next_steps: Vec<String>,
    pub disclaimer: String,
}

/// Score a payload. Skipped answers never count as concerns.
#[must_use]
pub fn score_screening(payload: &ScreeningPayload) -> ScoredReport {
    let flagged: Vec<QuestionId> = payload
        .answers()
        .filter(|(_, answer)| *answer == Answer::Value(CONCERN_ANSWER))
        .map(|(id, _)| id)
        .collect();

    let score: u32 = flagged.iter().map(|_| CONCERN_POINTS).sum();
    let risk_level = RiskLevel::from_score(score);

    ScoredReport {
        score,
        risk_level,
        observations: flagged
            .into_iter()
            .map(|id| observation(id).to_string())
            .collect(),
        next_steps: risk_level
            .next_steps()
            .into_iter()
            .map(str::to_string)
            .collect(),
        disclaimer: DISCLAIMER.to_string(),
    }
}
