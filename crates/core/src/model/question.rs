use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::form::FormError;

/// Number of questions on the screening form.
pub const TOTAL_QUESTIONS: usize = 6;

/// One of the six fixed screening questions, ordered by key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
}

impl QuestionId {
    /// All questions in key order.
    pub const ALL: [QuestionId; TOTAL_QUESTIONS] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
    ];

    /// Field key used by the form and the JSON payload (`q1`..`q6`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
            QuestionId::Q4 => "q4",
            QuestionId::Q5 => "q5",
            QuestionId::Q6 => "q6",
        }
    }

    /// Zero-based position on the form.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            QuestionId::Q1 => 0,
            QuestionId::Q2 => 1,
            QuestionId::Q3 => 2,
            QuestionId::Q4 => 3,
            QuestionId::Q5 => 4,
            QuestionId::Q6 => 5,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short prompt shown next to the question's select control.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            QuestionId::Q1 => "Does your child respond inconsistently when their name is called?",
            QuestionId::Q2 => "Does your child make limited eye contact during interaction?",
            QuestionId::Q3 => "Does your child rarely use gestures such as pointing or waving?",
            QuestionId::Q4 => "Do you notice repetitive movements or routines?",
            QuestionId::Q5 => "Does your child react strongly to sounds, textures or lights?",
            QuestionId::Q6 => "Does your child rarely engage in pretend or imaginative play?",
        }
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.key())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for QuestionId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s.trim())
            .ok_or_else(|| FormError::UnknownQuestion(s.to_string()))
    }
}
