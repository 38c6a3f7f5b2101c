use std::sync::Arc;

use thiserror::Error;

use pharmawatch_core::{FacilityId, ItemId};
use pharmawatch_inventory::InventoryItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordStoreError {
    /// The backing store cannot serve requests (connection lost, lock poisoned).
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// A record was rejected before being written.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Facility-scoped access to inventory records.
///
/// Listings are returned in a stable order (facility, then record id) so that
/// alert sequences derived from them are reproducible.
pub trait RecordStore: Send + Sync {
    fn get(&self, facility: FacilityId, id: ItemId) -> Result<Option<InventoryItem>, RecordStoreError>;

    /// Insert or replace a record. A record whose facility changed is moved.
    fn upsert(&self, item: InventoryItem) -> Result<(), RecordStoreError>;

    fn list(&self, facility: FacilityId) -> Result<Vec<InventoryItem>, RecordStoreError>;

    fn list_all(&self) -> Result<Vec<InventoryItem>, RecordStoreError>;

    /// Returns `true` if a record was removed.
    fn remove(&self, facility: FacilityId, id: ItemId) -> Result<bool, RecordStoreError>;

    /// Facilities that currently hold at least one record.
    fn facilities(&self) -> Result<Vec<FacilityId>, RecordStoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn get(&self, facility: FacilityId, id: ItemId) -> Result<Option<InventoryItem>, RecordStoreError> {
        (**self).get(facility, id)
    }

    fn upsert(&self, item: InventoryItem) -> Result<(), RecordStoreError> {
        (**self).upsert(item)
    }

    fn list(&self, facility: FacilityId) -> Result<Vec<InventoryItem>, RecordStoreError> {
        (**self).list(facility)
    }

    fn list_all(&self) -> Result<Vec<InventoryItem>, RecordStoreError> {
        (**self).list_all()
    }

    fn remove(&self, facility: FacilityId, id: ItemId) -> Result<bool, RecordStoreError> {
        (**self).remove(facility, id)
    }

    fn facilities(&self) -> Result<Vec<FacilityId>, RecordStoreError> {
        (**self).facilities()
    }
}
