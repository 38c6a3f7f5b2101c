use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use pharmawatch_core::{FacilityId, ItemId};
use pharmawatch_inventory::InventoryItem;

use super::r#trait::{RecordStore, RecordStoreError};

type Records = BTreeMap<(FacilityId, ItemId), InventoryItem>;

/// In-memory facility-scoped record store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Records>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-loaded with `items` (later duplicates win).
    pub fn with_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let mut records = Records::new();
        for item in items {
            records.retain(|(_, id), _| *id != item.id);
            records.insert((item.facility, item.id), item);
        }
        Self {
            inner: RwLock::new(records),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, RecordStoreError> {
        self.inner
            .read()
            .map_err(|_| RecordStoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, RecordStoreError> {
        self.inner
            .write()
            .map_err(|_| RecordStoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, facility: FacilityId, id: ItemId) -> Result<Option<InventoryItem>, RecordStoreError> {
        Ok(self.read()?.get(&(facility, id)).cloned())
    }

    fn upsert(&self, item: InventoryItem) -> Result<(), RecordStoreError> {
        if item.name.trim().is_empty() {
            return Err(RecordStoreError::InvalidRecord(format!(
                "record {} has an empty name",
                item.id
            )));
        }
        let mut map = self.write()?;
        map.retain(|(_, id), _| *id != item.id);
        map.insert((item.facility, item.id), item);
        Ok(())
    }

    fn list(&self, facility: FacilityId) -> Result<Vec<InventoryItem>, RecordStoreError> {
        let map = self.read()?;
        Ok(map
            .range((facility, ItemId::from_u128(0))..=(facility, ItemId::from_u128(u128::MAX)))
            .map(|(_, v)| v.clone())
            .collect())
    }

    fn list_all(&self) -> Result<Vec<InventoryItem>, RecordStoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn remove(&self, facility: FacilityId, id: ItemId) -> Result<bool, RecordStoreError> {
        Ok(self.write()?.remove(&(facility, id)).is_some())
    }

    fn facilities(&self) -> Result<Vec<FacilityId>, RecordStoreError> {
        let map = self.read()?;
        let mut out: Vec<FacilityId> = map.keys().map(|(f, _)| *f).collect();
        out.dedup();
        Ok(out)
    }
}
