//! LMDB storage backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store, no external server required.
//! All operations are synchronous (memory-mapped I/O) and are wrapped in
//! `tokio::task::spawn_blocking` for async compatibility. Committed write
//! transactions survive process crashes.
//!
//! # Architecture
//!
//! - `LmdbEnvironment`: one LMDB environment (directory) per process
//! - `LmdbRecordStore<T>`: one named sub-database per record type inside
//!   that environment, keyed by record id
//!
//! LMDB keeps keys sorted byte-wise, which gives `values()` its ascending
//! key order for free.
//!
//! # Serialization
//!
//! Values are stored as JSON bytes via `serde_json`.
//!
//! # Feature flag
//!
//! Enable with `--features lmdb` (on by default). Requires the `heed` crate.

use crate::core::{Record, RecordStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

/// One database per record type, plus headroom.
const MAX_DBS: u32 = 16;

// ---------------------------------------------------------------------------
// Serialization helpers
// ---------------------------------------------------------------------------

/// Encode a value as JSON bytes for LMDB storage.
fn lmdb_encode<T: serde::Serialize>(item: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(item).map_err(|e| anyhow!("lmdb encode: {}", e))
}

/// Decode a value from JSON bytes.
fn lmdb_decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| anyhow!("lmdb decode: {}", e))
}

// ---------------------------------------------------------------------------
// LmdbEnvironment
// ---------------------------------------------------------------------------

/// Shared LMDB environment hosting every record store
///
/// Open it once at startup and derive one store per record type from it.
/// The `Env` is wrapped in an `Arc` for cheap cloning across async tasks.
#[derive(Clone)]
pub struct LmdbEnvironment {
    env: Arc<Env>,
}

impl LmdbEnvironment {
    /// Open (or create) an LMDB environment at `path`
    ///
    /// `map_size` is the address space reserved for the data file, in bytes.
    /// LMDB does not allocate it up front, but writes fail once it is full.
    pub fn open(path: impl AsRef<Path>, map_size: usize) -> Result<Self> {
        std::fs::create_dir_all(path.as_ref())?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .max_readers(126)
                .open(path.as_ref())?
        };

        tracing::info!(
            path = %path.as_ref().display(),
            map_size,
            "opened LMDB environment"
        );

        Ok(Self { env: Arc::new(env) })
    }

    /// Open (or create) the store for record type `T`
    ///
    /// The sub-database is named after `T::resource_name()`, so every record
    /// type lives in its own key space.
    pub fn store<T: Record>(&self) -> Result<LmdbRecordStore<T>> {
        let mut wtxn = self.env.write_txn()?;
        let db: Database<Str, Bytes> =
            self.env
                .create_database(&mut wtxn, Some(T::resource_name()))?;
        wtxn.commit()?;

        Ok(LmdbRecordStore {
            env: Arc::clone(&self.env),
            db,
            _marker: PhantomData,
        })
    }
}

// ---------------------------------------------------------------------------
// LmdbRecordStore
// ---------------------------------------------------------------------------

/// LMDB-backed implementation of `RecordStore<T>`.
///
/// Stores records as JSON blobs keyed by their id.
///
/// # Example
///
/// ```rust,ignore
/// use bistro::storage::LmdbEnvironment;
///
/// let env = LmdbEnvironment::open("/tmp/bistro-lmdb", DEFAULT_MAP_SIZE)?;
/// let restaurants = env.store::<Restaurant>()?;
/// restaurants.insert(&restaurant.id, restaurant.clone()).await?;
/// ```
pub struct LmdbRecordStore<T: Record> {
    env: Arc<Env>,
    db: Database<Str, Bytes>,
    _marker: PhantomData<T>,
}

impl<T: Record> Clone for LmdbRecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            env: Arc::clone(&self.env),
            db: self.db,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for LmdbRecordStore<T> {
    async fn insert(&self, key: &str, record: T) -> Result<T> {
        let env = self.env.clone();
        let db = self.db;
        let key = key.to_owned();
        let bytes = lmdb_encode(&record)?;

        tokio::task::spawn_blocking(move || {
            let mut wtxn = env.write_txn()?;
            db.put(&mut wtxn, &key, &bytes)?;
            wtxn.commit()?;
            Ok(record)
        })
        .await?
    }

    async fn get(&self, key: &str) -> Result<Option<T>> {
        let env = self.env.clone();
        let db = self.db;
        let key = key.to_owned();

        tokio::task::spawn_blocking(move || {
            let rtxn = env.read_txn()?;
            match db.get(&rtxn, &key)? {
                Some(bytes) => Ok(Some(lmdb_decode(bytes)?)),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn values(&self) -> Result<Vec<T>> {
        let env = self.env.clone();
        let db = self.db;

        tokio::task::spawn_blocking(move || {
            let rtxn = env.read_txn()?;
            let mut results = Vec::new();
            for item in db.iter(&rtxn)? {
                let (_key, bytes) = item?;
                results.push(lmdb_decode(bytes)?);
            }
            Ok(results)
        })
        .await?
    }

    async fn len(&self) -> Result<usize> {
        let env = self.env.clone();
        let db = self.db;

        tokio::task::spawn_blocking(move || {
            let rtxn = env.read_txn()?;
            Ok(usize::try_from(db.len(&rtxn)?)?)
        })
        .await?
    }
}
