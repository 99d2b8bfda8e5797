//! In-memory implementation of RecordStore for testing and development

use crate::core::{Record, RecordStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Keys are kept sorted by a `BTreeMap`, so `values()` comes back in
/// ascending key order like the persistent backend. Uses RwLock for
/// thread-safe access. Contents are lost when the process exits.
#[derive(Clone)]
pub struct InMemoryRecordStore<T: Record> {
    records: Arc<RwLock<BTreeMap<String, T>>>,
}

impl<T: Record> InMemoryRecordStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn insert(&self, key: &str, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.insert(key.to_string(), record.clone());

        Ok(record)
    }

    async fn get(&self, key: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(key).cloned())
    }

    async fn values(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }
}
