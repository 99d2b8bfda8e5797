//! Integration tests for InMemoryRecordStore using the storage test harness.
//!
//! `record_store_tests!` validates the `RecordStore<T>` contract and
//! `rest_integration_tests!` runs the full router over in-memory stores.

#[macro_use]
mod storage_harness;

use bistro::storage::{InMemoryRecordStore, RestaurantStores};
use storage_harness::*;

record_store_tests!(InMemoryRecordStore::<TestDish>::new());
rest_integration_tests!(RestaurantStores::in_memory());
