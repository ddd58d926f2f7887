use std::collections::HashMap;

use thiserror::Error;

use super::question::QuestionId;

/// Errors raised while reading the screening form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormError {
    #[error("form field {0} is missing")]
    MissingField(QuestionId),

    #[error("question {} has no selection control", index + 1)]
    MissingControl { index: usize },

    #[error("question {0} was not answered")]
    Skipped(QuestionId),

    #[error("unknown question key: {0}")]
    UnknownQuestion(String),
}

/// Read access to the value-bearing controls of a screening form.
///
/// Returns `None` when the form has no control for the question.
pub trait FormSource {
    fn field_value(&self, question: QuestionId) -> Option<String>;
}

/// Plain key/value form, handy for fixtures and headless callers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<QuestionId, String>,
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form with every question filled from `values`, in key order.
    #[must_use]
    pub fn from_values<S: Into<String>>(values: [S; 6]) -> Self {
        let mut form = Self::new();
        for (id, value) in QuestionId::ALL.into_iter().zip(values) {
            form.set(id, value);
        }
        form
    }

    pub fn set(&mut self, question: QuestionId, value: impl Into<String>) {
        self.values.insert(question, value.into());
    }

    pub fn remove(&mut self, question: QuestionId) -> Option<String> {
        self.values.remove(&question)
    }
}

impl FormSource for FormValues {
    fn field_value(&self, question: QuestionId) -> Option<String> {
        self.values.get(&question).cloned()
    }
}
