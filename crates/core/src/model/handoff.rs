use std::fmt;

use super::payload::ScreeningPayload;
use super::result::ScreeningResult;

/// Named slot used to hand data to the next page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandoffSlot {
    /// Raw answers waiting to be scored.
    ScreeningData,
    /// Scored result waiting to be shown.
    ScreeningResult,
}

impl HandoffSlot {
    pub const ALL: [HandoffSlot; 2] = [HandoffSlot::ScreeningData, HandoffSlot::ScreeningResult];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            HandoffSlot::ScreeningData => "screeningData",
            HandoffSlot::ScreeningResult => "screeningResult",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

impl fmt::Display for HandoffSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Typed content of a handoff slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Handoff {
    Payload(ScreeningPayload),
    Result(ScreeningResult),
}

impl Handoff {
    #[must_use]
    pub fn slot(&self) -> HandoffSlot {
        match self {
            Handoff::Payload(_) => HandoffSlot::ScreeningData,
            Handoff::Result(_) => HandoffSlot::ScreeningResult,
        }
    }

    /// Serialize the slot content as JSON text.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Handoff::Payload(payload) => serde_json::to_string(payload),
            Handoff::Result(result) => serde_json::to_string(result),
        }
    }

    /// Decode JSON text read from `slot`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text does not match the slot's shape.
    pub fn from_json(slot: HandoffSlot, body: &str) -> Result<Self, serde_json::Error> {
        match slot {
            HandoffSlot::ScreeningData => serde_json::from_str(body).map(Handoff::Payload),
            HandoffSlot::ScreeningResult => serde_json::from_str(body).map(Handoff::Result),
        }
    }
}
