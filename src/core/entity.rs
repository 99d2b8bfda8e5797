//! Record trait defining the shared shape of every stored entity

use crate::core::id::IdGenerator;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Base trait for all records kept by the service.
///
/// Every record has:
/// - id: identifier generated at creation, primary key of its store
/// - created_at: creation time in epoch milliseconds
/// - restaurant_id: reference to the owning restaurant (all but `Restaurant`)
///
/// Records are built once from a validated [`Record::Draft`] and never
/// mutated afterwards.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Client-supplied part of the record, deserialized from the create payload
    type Draft: DeserializeOwned + Send;

    /// URL segment and store namespace (e.g., "restaurants", "menu")
    fn resource_name() -> &'static str;

    /// Human-readable singular label used in messages (e.g., "Menu item")
    fn label() -> &'static str;

    /// Human-readable plural label used in messages (e.g., "Menu items")
    fn label_plural() -> &'static str;

    /// Payload fields that must be present on create, in checking order
    fn required_fields() -> &'static [&'static str];

    /// Build the record from its generated metadata and the client draft
    fn from_draft(id: String, created_at: i64, draft: Self::Draft) -> Self;

    /// Build a new record: fresh id from `ids`, creation time now
    fn create(ids: &dyn IdGenerator, draft: Self::Draft) -> Self {
        Self::from_draft(ids.generate(), Utc::now().timestamp_millis(), draft)
    }

    // === Core Record Fields ===

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Get the creation timestamp (epoch millis)
    fn created_at(&self) -> i64;

    /// Get the owning restaurant reference, if this record has one
    ///
    /// The reference is never checked against the restaurant store.
    fn restaurant_id(&self) -> Option<&str> {
        None
    }
}
