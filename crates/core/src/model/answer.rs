use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Largest integer a JSON number carries without precision loss.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Answer selected for one screening question.
///
/// Raw control values are coerced numerically. Anything that does not
/// coerce to a whole number becomes `Skipped`, which serializes as JSON
/// `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Answer {
    Value(i64),
    #[default]
    Skipped,
}

impl Answer {
    /// Coerce a raw control value.
    ///
    /// Surrounding whitespace is ignored. An empty value is a skipped
    /// question, not zero.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Skipped;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Value(value);
        }
        trimmed
            .parse::<f64>()
            .map_or(Self::Skipped, Self::from_number)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    fn from_number(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            Self::Value(value as i64)
        } else {
            Self::Skipped
        }
    }

    /// Whole JSON numbers keep their exact integer value; other numbers go
    /// through the same whole-number check as coerced text.
    #[must_use]
    pub fn from_json_number(number: &Number) -> Self {
        match number.as_i64() {
            Some(value) => Self::Value(value),
            None => number.as_f64().map_or(Self::Skipped, Self::from_number),
        }
    }

    /// Read an answer from loosely typed JSON. Anything other than a number
    /// (strings, booleans, objects, `null`, absent) is skipped.
    #[must_use]
    pub fn from_json_lenient(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(number)) => Self::from_json_number(number),
            _ => Self::Skipped,
        }
    }

    #[must_use]
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Skipped => None,
        }
    }

    #[must_use]
    pub fn is_skipped(self) -> bool {
        matches!(self, Self::Skipped)
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_i64(*value),
            Self::Skipped => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Number>::deserialize(deserializer)?;
        Ok(raw.as_ref().map_or(Self::Skipped, Self::from_json_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_numeric_strings() {
        assert_eq!(Answer::coerce("2"), Answer::Value(2));
        assert_eq!(Answer::coerce(" 1 "), Answer::Value(1));
        assert_eq!(Answer::coerce("-3"), Answer::Value(-3));
        assert_eq!(Answer::coerce("2.0"), Answer::Value(2));
        assert_eq!(Answer::coerce("1e1"), Answer::Value(10));
    }

    #[test]
    fn non_numeric_values_are_skipped() {
        for raw in ["", "   ", "often", "1.5", "NaN", "inf", "2a"] {
            assert_eq!(Answer::coerce(raw), Answer::Skipped, "raw value {raw:?}");
        }
    }

    #[test]
    fn skipped_serializes_as_null() {
        assert_eq!(serde_json::to_string(&Answer::Skipped).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Answer::Value(2)).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Answer>("null").unwrap(), Answer::Skipped);
        assert_eq!(serde_json::from_str::<Answer>("1").unwrap(), Answer::Value(1));
        assert_eq!(serde_json::from_str::<Answer>("1.5").unwrap(), Answer::Skipped);
        assert_eq!(serde_json::from_str::<Answer>("2.0").unwrap(), Answer::Value(2));
    }

    #[test]
    fn large_integers_survive_json() {
        let raw = "9007199254740993";
        let answer = Answer::coerce(raw);
        assert_eq!(answer, Answer::Value(9_007_199_254_740_993));
        let text = serde_json::to_string(&answer).unwrap();
        assert_eq!(text, raw);
        assert_eq!(serde_json::from_str::<Answer>(&text).unwrap(), answer);
    }

    #[test]
    fn lenient_json_skips_non_numbers() {
        assert_eq!(Answer::from_json_lenient(Some(&Value::from(2))), Answer::Value(2));
        assert_eq!(Answer::from_json_lenient(Some(&Value::from("2"))), Answer::Skipped);
        assert_eq!(Answer::from_json_lenient(Some(&Value::Bool(true))), Answer::Skipped);
        assert_eq!(Answer::from_json_lenient(Some(&Value::Null)), Answer::Skipped);
        assert_eq!(Answer::from_json_lenient(None), Answer::Skipped);
    }
}
