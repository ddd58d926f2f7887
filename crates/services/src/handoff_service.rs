use std::sync::Arc;

use screening_core::Clock;
use screening_core::model::{Handoff, HandoffSlot, ScreeningPayload, ScreeningResult};
use storage::repository::{HandoffRecord, HandoffRepository, StorageError};
use tracing::debug;

use crate::error::HandoffError;

/// Typed access to the handoff slots shared between pages.
///
/// The form page writes, the loading page and the dashboard read. A write
/// replaces whatever the slot held before.
#[derive(Clone)]
pub struct HandoffService {
    clock: Clock,
    repo: Arc<dyn HandoffRepository>,
}

impl HandoffService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn HandoffRepository>) -> Self {
        Self { clock, repo }
    }

    /// Persist `handoff` into its slot.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError` if encoding or storage fails.
    pub async fn write(&self, handoff: &Handoff) -> Result<(), HandoffError> {
        let record = HandoffRecord::from_handoff(handoff, self.clock.now())?;
        self.repo.put(&record).await?;
        debug!(slot = %record.slot, bytes = record.body.len(), "handoff written");
        Ok(())
    }

    /// Read and decode a slot.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::Corrupt` if the slot holds data of the wrong
    /// shape, or `HandoffError::Storage` on adapter failures.
    pub async fn load(&self, slot: HandoffSlot) -> Result<Option<Handoff>, HandoffError> {
        let Some(record) = self.repo.get(slot).await? else {
            return Ok(None);
        };
        match record.into_handoff() {
            Ok(handoff) => Ok(Some(handoff)),
            Err(StorageError::Serialization(reason)) => Err(HandoffError::Corrupt { slot, reason }),
            Err(err) => Err(err.into()),
        }
    }

    /// Answers waiting on the loading page.
    ///
    /// # Errors
    ///
    /// See [`HandoffService::load`].
    pub async fn load_payload(&self) -> Result<Option<ScreeningPayload>, HandoffError> {
        match self.load(HandoffSlot::ScreeningData).await? {
            Some(Handoff::Payload(payload)) => Ok(Some(payload)),
            _ => Ok(None),
        }
    }

    /// Result waiting on the dashboard.
    ///
    /// # Errors
    ///
    /// See [`HandoffService::load`].
    pub async fn load_result(&self) -> Result<Option<ScreeningResult>, HandoffError> {
        match self.load(HandoffSlot::ScreeningResult).await? {
            Some(Handoff::Result(result)) => Ok(Some(result)),
            _ => Ok(None),
        }
    }

    /// Clear one slot. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::Storage` on adapter failures.
    pub async fn clear(&self, slot: HandoffSlot) -> Result<bool, HandoffError> {
        let removed = self.repo.delete(slot).await?;
        if removed {
            debug!(%slot, "handoff cleared");
        }
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns `HandoffError::Storage` on adapter failures.
    pub async fn clear_all(&self) -> Result<(), HandoffError> {
        for slot in HandoffSlot::ALL {
            self.clear(slot).await?;
        }
        Ok(())
    }
}
