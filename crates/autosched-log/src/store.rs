//! Append-only keyed storage of observability records.
//!
//! The store is the one piece of state the engine touches across ticks, and
//! it is injected rather than global: a flat key-to-record mapping behind the
//! [`LogStore`] trait. Keys are unique per tick per device, so `set` is
//! effectively append-only. The trait is fallible so an unavailable backend
//! surfaces as an error the caller can log and contain, never a panic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::record::ObservabilityRecord;

/// Injected key-value interface over the record store.
pub trait LogStore {
    fn get(&self, key: &str) -> StoreResult<Option<ObservabilityRecord>>;
    fn set(&mut self, key: &str, record: ObservabilityRecord) -> StoreResult<()>;
    /// Remove a record, reporting whether it existed.
    fn remove(&mut self, key: &str) -> StoreResult<bool>;
    fn keys(&self) -> StoreResult<Vec<String>>;
    fn len(&self) -> StoreResult<usize>;
}

/// Insert a record under its own key.
pub fn save(store: &mut dyn LogStore, record: ObservabilityRecord) -> StoreResult<()> {
    let key = record.log_key.clone();
    store.set(&key, record)
}

/// In-memory store: a plain `HashMap` serialized as the flat key-to-record
/// mapping of the persisted layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    records: HashMap<String, ObservabilityRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LogStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<ObservabilityRecord>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, record: ObservabilityRecord) -> StoreResult<()> {
        self.records.insert(key.to_string(), record);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        Ok(self.records.remove(key).is_some())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }
}
