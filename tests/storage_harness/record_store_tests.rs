//! Macro-generated test suite for `RecordStore<TestDish>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use bistro::storage::InMemoryRecordStore;
//!
//! record_store_tests!(InMemoryRecordStore::<TestDish>::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_insert_and_get`: insert then retrieve, verify all fields
//! - `test_get_nonexistent`: unknown key returns None
//! - `test_values_empty`: empty store lists nothing
//! - `test_values_sorted_by_key`: values come back in ascending key order
//! - `test_insert_same_key_overwrites`: second insert replaces the first
//! - `test_len_and_is_empty`
//! - `test_concurrent_inserts`: parallel inserts from spawned tasks

/// Generate a full `RecordStore<TestDish>` conformance test suite.
///
/// `$factory` is re-evaluated for each test. The store it returns must be
/// `Clone + 'static` with shared state, for the concurrent test.
#[macro_export]
macro_rules! record_store_tests {
    ($factory:expr) => {
        mod record_store_contract_tests {
            use super::*;
            use bistro::core::RecordStore;

            #[tokio::test]
            async fn test_insert_and_get() {
                let store = $factory;
                let dish = create_test_dish("Ratatouille", 14.5);

                let inserted = store.insert(&dish.id, dish.clone()).await.unwrap();
                assert_eq!(inserted, dish);

                let fetched = store.get(&dish.id).await.unwrap().expect("record should exist");
                assert_eq!(fetched.name, "Ratatouille");
                assert_eq!(fetched.restaurant_id, "r-test");
                assert!((fetched.price - 14.5).abs() < f64::EPSILON);
                assert_eq!(fetched.created_at, dish.created_at);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get("does-not-exist").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_values_empty() {
                let store = $factory;
                assert_count(&store.values().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_values_sorted_by_key() {
                let store = $factory;
                for id in ["c", "a", "d", "b"] {
                    let dish = dish_with_id(id, id);
                    store.insert(id, dish).await.unwrap();
                }

                let values = store.values().await.unwrap();
                assert_count(&values, 4);
                assert_sorted_by_id(&values);
                assert_eq!(values[0].id, "a");
                assert_eq!(values[3].id, "d");
            }

            #[tokio::test]
            async fn test_insert_same_key_overwrites() {
                let store = $factory;
                store.insert("k", dish_with_id("k", "first")).await.unwrap();
                store.insert("k", dish_with_id("k", "second")).await.unwrap();

                let values = store.values().await.unwrap();
                assert_count(&values, 1);
                assert_eq!(values[0].name, "second");
            }

            #[tokio::test]
            async fn test_len_and_is_empty() {
                let store = $factory;
                assert!(store.is_empty().await.unwrap());

                for i in 0..3 {
                    let dish = create_test_dish(&format!("dish-{}", i), i as f64);
                    store.insert(&dish.id, dish.clone()).await.unwrap();
                }

                assert_eq!(store.len().await.unwrap(), 3);
                assert!(!store.is_empty().await.unwrap());
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store = $factory;
                let mut handles = Vec::new();

                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        let dish = create_test_dish(&format!("dish-{}", i), 1.0);
                        store.insert(&dish.id, dish.clone()).await.unwrap();
                        dish.id
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap());
                }

                assert_eq!(store.len().await.unwrap(), 10);
                for id in ids {
                    assert!(store.get(&id).await.unwrap().is_some());
                }
            }
        }
    };
}
