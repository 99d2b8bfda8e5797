//! Ordered record store abstraction

use crate::core::entity::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Sorted mapping from string key to record
///
/// Each entity type owns one store and stores never share key space.
/// Implementations must keep single-key `insert` and `get` atomic.
/// The framework is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Add or overwrite the record stored under `key`
    ///
    /// No uniqueness check is performed here: keys come from the
    /// identifier generator.
    async fn insert(&self, key: &str, record: T) -> Result<T>;

    /// Get the record stored under `key`
    async fn get(&self, key: &str) -> Result<Option<T>>;

    /// Snapshot of every record in ascending key order
    async fn values(&self) -> Result<Vec<T>>;

    /// Number of stored records
    async fn len(&self) -> Result<usize> {
        Ok(self.values().await?.len())
    }

    /// Whether the store holds no record
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
