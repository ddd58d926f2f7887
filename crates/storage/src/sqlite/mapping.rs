use chrono::{DateTime, Utc};
use screening_core::model::HandoffSlot;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{HandoffRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn parse_slot(key: &str) -> Result<HandoffSlot, StorageError> {
    HandoffSlot::from_key(key)
        .ok_or_else(|| StorageError::Serialization(format!("invalid slot: {key}")))
}

pub(crate) fn map_handoff_row(row: &SqliteRow) -> Result<HandoffRecord, StorageError> {
    let slot: String = row.try_get("slot").map_err(ser)?;
    let body: String = row.try_get("body").map_err(ser)?;
    let written_at: DateTime<Utc> = row.try_get("written_at").map_err(ser)?;

    Ok(HandoffRecord {
        slot: parse_slot(&slot)?,
        body,
        written_at,
    })
}
