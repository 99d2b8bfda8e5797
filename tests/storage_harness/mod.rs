//! Shared test harness for storage backend testing
//!
//! Provides `TestDish`, a record declared through `impl_record!` the same way
//! the real record types are, plus helpers for creating test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod record_store_tests;

#[macro_use]
pub mod rest_tests;

use bistro::core::{Record, UuidGenerator};

// ---------------------------------------------------------------------------
// TestDish
// ---------------------------------------------------------------------------

bistro::impl_record!(
    TestDish,
    TestDishDraft,
    "test_dishes",
    labels: ("Test dish", "Test dishes"),
    required: ["restaurantId", "name", "price"],
    owned {
        name: String,
        price: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        spicy: Option<bool>,
    }
);

/// Build a draft for `restaurant_id`
pub fn dish_draft(restaurant_id: &str, name: &str, price: f64) -> TestDishDraft {
    TestDishDraft {
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        price,
        spicy: None,
    }
}

/// Build a complete record with a fresh id
pub fn create_test_dish(name: &str, price: f64) -> TestDish {
    TestDish::create(&UuidGenerator, dish_draft("r-test", name, price))
}

/// Build a record with a chosen id, for ordering assertions
pub fn dish_with_id(id: &str, name: &str) -> TestDish {
    TestDish::from_draft(id.to_string(), 0, dish_draft("r-test", name, 1.0))
}

// ---------------------------------------------------------------------------
// Assertions helpers
// ---------------------------------------------------------------------------

/// Assert that a list contains exactly `n` records.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Assert that ids come back in ascending order.
pub fn assert_sorted_by_id(list: &[TestDish]) {
    let ids: Vec<&str> = list.iter().map(|d| d.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "records are not in ascending key order");
}
