use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::ScoredReport;

/// Result returned by a scoring endpoint.
///
/// Kept as the raw JSON value and passed through unmodified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreeningResult(Value);

impl ScreeningResult {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Typed view of the result when it has the bundled scorer's shape.
    #[must_use]
    pub fn report(&self) -> Option<ScoredReport> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

impl From<Value> for ScreeningResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&ScoredReport> for ScreeningResult {
    fn from(report: &ScoredReport) -> Self {
        // A report is plain strings and integers; serializing it cannot fail.
        Self(serde_json::to_value(report).unwrap_or(Value::Null))
    }
}
