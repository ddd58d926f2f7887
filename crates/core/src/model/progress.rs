use std::fmt;

use super::form::FormError;
use super::question::{QuestionId, TOTAL_QUESTIONS};

/// Position shown in the progress display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    index: usize,
}

impl Progress {
    #[must_use]
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Display text, e.g. `Question 3 of 6`.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {} of {TOTAL_QUESTIONS}", self.index + 1)
    }
}

/// Binds each question's selection control to the shared progress display.
///
/// The display starts on the first question and afterwards follows
/// whichever bound control changed last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressTracker {
    bindings: Vec<QuestionId>,
    current: Progress,
}

impl ProgressTracker {
    /// Bind one selection control per question element.
    ///
    /// `controls` yields, in form order, the control found inside each
    /// question element. The element count is not checked against six.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingControl` for the first question element
    /// without a selection control.
    pub fn attach<I>(controls: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = Option<QuestionId>>,
    {
        let bindings = controls
            .into_iter()
            .enumerate()
            .map(|(index, control)| control.ok_or(FormError::MissingControl { index }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            bindings,
            current: Progress::default(),
        })
    }

    /// Tracker for the standard form where question `i` owns control `q{i+1}`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bindings: QuestionId::ALL.to_vec(),
            current: Progress::default(),
        }
    }

    /// Record a change on `control`. Unbound controls leave the display as is.
    pub fn on_change(&mut self, control: QuestionId) -> Progress {
        if let Some(index) = self.bindings.iter().position(|bound| *bound == control) {
            self.current = Progress::at(index);
        }
        self.current
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.current
    }

    #[must_use]
    pub fn bound_controls(&self) -> &[QuestionId] {
        &self.bindings
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::standard()
    }
}
