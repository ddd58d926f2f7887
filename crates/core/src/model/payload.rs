use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::answer::Answer;
use super::form::{FormError, FormSource};
use super::question::{QuestionId, TOTAL_QUESTIONS};

/// The six answers collected on submission, keyed `q1`..`q6`.
///
/// Field order is the serialization order. Keys absent from incoming JSON
/// read as skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningPayload {
    #[serde(default)]
    q1: Answer,
    #[serde(default)]
    q2: Answer,
    #[serde(default)]
    q3: Answer,
    #[serde(default)]
    q4: Answer,
    #[serde(default)]
    q5: Answer,
    #[serde(default)]
    q6: Answer,
}

impl ScreeningPayload {
    #[must_use]
    pub fn from_answers(answers: [Answer; TOTAL_QUESTIONS]) -> Self {
        let [q1, q2, q3, q4, q5, q6] = answers;
        Self {
            q1,
            q2,
            q3,
            q4,
            q5,
            q6,
        }
    }

    /// Read and coerce every field of `form` in key order.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingField` for the first question the form has
    /// no control for.
    pub fn collect(form: &dyn FormSource) -> Result<Self, FormError> {
        let mut answers = [Answer::Skipped; TOTAL_QUESTIONS];
        for id in QuestionId::ALL {
            let raw = form
                .field_value(id)
                .ok_or(FormError::MissingField(id))?;
            answers[id.index()] = Answer::coerce(&raw);
        }
        Ok(Self::from_answers(answers))
    }

    /// Read a payload from loosely typed JSON, such as an HTTP request body.
    ///
    /// Keys holding anything other than a number read as skipped. Returns
    /// `None` unless `value` is a JSON object.
    #[must_use]
    pub fn from_json_lenient(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let answers = QuestionId::ALL.map(|id| Answer::from_json_lenient(object.get(id.key())));
        Some(Self::from_answers(answers))
    }

    #[must_use]
    pub fn answer(&self, question: QuestionId) -> Answer {
        match question {
            QuestionId::Q1 => self.q1,
            QuestionId::Q2 => self.q2,
            QuestionId::Q3 => self.q3,
            QuestionId::Q4 => self.q4,
            QuestionId::Q5 => self.q5,
            QuestionId::Q6 => self.q6,
        }
    }

    /// Answers paired with their question, in key order.
    pub fn answers(&self) -> impl Iterator<Item = (QuestionId, Answer)> + '_ {
        QuestionId::ALL.into_iter().map(|id| (id, self.answer(id)))
    }

    #[must_use]
    pub fn skipped(&self) -> Vec<QuestionId> {
        self.answers()
            .filter(|(_, answer)| answer.is_skipped())
            .map(|(id, _)| id)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `FormError::Skipped` for the first unanswered question.
    pub fn require_complete(&self) -> Result<(), FormError> {
        match self.skipped().first() {
            Some(id) => Err(FormError::Skipped(*id)),
            None => Ok(()),
        }
    }
}
