use async_trait::async_trait;
use chrono::{DateTime, Utc};
use screening_core::model::{Handoff, HandoffSlot};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of a handoff slot: the JSON text plus when it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffRecord {
    pub slot: HandoffSlot,
    pub body: String,
    pub written_at: DateTime<Utc>,
}

impl HandoffRecord {
    /// Encode a typed handoff for storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the value cannot be encoded.
    pub fn from_handoff(handoff: &Handoff, written_at: DateTime<Utc>) -> Result<Self, StorageError> {
        let body = handoff
            .to_json()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Self {
            slot: handoff.slot(),
            body,
            written_at,
        })
    }

    /// Decode the stored JSON text back into a typed handoff.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the body does not match the
    /// slot's shape.
    pub fn into_handoff(self) -> Result<Handoff, StorageError> {
        Handoff::from_json(self.slot, &self.body)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

/// Repository contract for handoff slots.
///
/// A slot holds at most one record; writing replaces the previous one.
#[async_trait]
pub trait HandoffRepository: Send + Sync {
    /// Write or overwrite the record's slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn put(&self, record: &HandoffRecord) -> Result<(), StorageError>;

    /// Read a slot, `None` when it was never written or has been cleared.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn get(&self, slot: HandoffSlot) -> Result<Option<HandoffRecord>, StorageError>;

    /// Clear a slot. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn delete(&self, slot: HandoffSlot) -> Result<bool, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<HandoffSlot, HandoffRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandoffRepository for InMemoryRepository {
    async fn put(&self, record: &HandoffRecord) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.slot, record.clone());
        Ok(())
    }

    async fn get(&self, slot: HandoffSlot) -> Result<Option<HandoffRecord>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&slot).cloned())
    }

    async fn delete(&self, slot: HandoffSlot) -> Result<bool, StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.remove(&slot).is_some())
    }
}

/// Aggregates the repositories used by the app.
#[derive(Clone)]
pub struct Storage {
    pub handoff: Arc<dyn HandoffRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            handoff: Arc::new(InMemoryRepository::new()),
        }
    }
}
