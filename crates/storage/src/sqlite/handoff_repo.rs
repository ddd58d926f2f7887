use async_trait::async_trait;
use screening_core::model::HandoffSlot;

use super::SqliteRepository;
use super::mapping::map_handoff_row;
use crate::repository::{HandoffRecord, HandoffRepository, StorageError};

#[async_trait]
impl HandoffRepository for SqliteRepository {
    async fn put(&self, record: &HandoffRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO handoff_slots (slot, body, written_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(slot) DO UPDATE SET
                body = excluded.body,
                written_at = excluded.written_at
            ",
        )
        .bind(record.slot.key())
        .bind(&record.body)
        .bind(record.written_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn get(&self, slot: HandoffSlot) -> Result<Option<HandoffRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT slot, body, written_at
            FROM handoff_slots
            WHERE slot = ?1
            ",
        )
        .bind(slot.key())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.as_ref().map(map_handoff_row).transpose()
    }

    async fn delete(&self, slot: HandoffSlot) -> Result<bool, StorageError> {
        let res = sqlx::query("DELETE FROM handoff_slots WHERE slot = ?1")
            .bind(slot.key())
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(res.rows_affected() > 0)
    }
}
