//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that run the
//! real router over a given set of stores:
//! JSON → HTTP request → auth gate → handler → RecordStore → envelope.

/// Generate a REST integration test suite for a storage backend.
///
/// `$stores_factory` must produce a fresh `RestaurantStores` per evaluation.
///
/// # Generated Tests
///
/// - `test_rest_create_then_get`: POST 201, GET by id 200 with the same record
/// - `test_rest_list_empty_is_not_found`: GET on an empty store → 404
/// - `test_rest_list_pagination`: page=2&limit=2 returns the right slice
/// - `test_rest_create_reaches_store`: the record lands in the backing store
/// - `test_rest_rejected_create_persists_nothing`
#[macro_export]
macro_rules! rest_integration_tests {
    ($stores_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::{HeaderName, HeaderValue, StatusCode, header};
            use axum_test::TestServer;
            use bistro::core::RecordStore;
            use bistro::entities::RestaurantModule;
            use bistro::server::ServerBuilder;
            use bistro::storage::RestaurantStores;
            use serde_json::{Value, json};

            const AUTH: HeaderName = header::AUTHORIZATION;

            fn token() -> HeaderValue {
                HeaderValue::from_static("secureToken")
            }

            fn make_server() -> (TestServer, RestaurantStores) {
                let stores: RestaurantStores = $stores_factory;
                let router = ServerBuilder::new()
                    .register_module(RestaurantModule::new(stores.clone()))
                    .build()
                    .unwrap();
                (TestServer::new(router), stores)
            }

            async fn create_restaurant(server: &TestServer, name: &str) -> Value {
                let response = server
                    .post("/restaurants")
                    .add_header(AUTH, token())
                    .json(&json!({"name": name, "location": "Main St"}))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()
            }

            #[tokio::test]
            async fn test_rest_create_then_get() {
                let (server, _stores) = make_server();

                let created = create_restaurant(&server, "Cafe A").await;
                assert_eq!(created["status"], 201);
                assert_eq!(created["message"], "Restaurant created successfully.");
                let id = created["data"]["id"].as_str().unwrap().to_string();

                let response = server
                    .get(&format!("/restaurants/{}", id))
                    .add_header(AUTH, token())
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["message"], "Restaurant retrieved successfully.");
                assert_eq!(body["data"], created["data"]);
            }

            #[tokio::test]
            async fn test_rest_list_empty_is_not_found() {
                let (server, _stores) = make_server();

                let response = server.get("/expenses").add_header(AUTH, token()).await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                assert_eq!(body["status"], 404);
                assert_eq!(body["message"], "No expenses found.");
            }

            #[tokio::test]
            async fn test_rest_list_pagination() {
                let (server, stores) = make_server();
                for i in 0..5 {
                    create_restaurant(&server, &format!("R{}", i)).await;
                }

                let response = server
                    .get("/restaurants")
                    .add_header(AUTH, token())
                    .add_query_param("page", 2)
                    .add_query_param("limit", 2)
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                let page = body["data"].as_array().unwrap();
                assert_eq!(page.len(), 2);

                let all = stores.restaurants.values().await.unwrap();
                assert_eq!(page[0]["id"], all[2].id.as_str());
                assert_eq!(page[1]["id"], all[3].id.as_str());
            }

            #[tokio::test]
            async fn test_rest_create_reaches_store() {
                let (server, stores) = make_server();

                let response = server
                    .post("/menu")
                    .add_header(AUTH, token())
                    .json(&json!({"restaurantId": "r-1", "name": "Soup", "price": 6.5}))
                    .await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                let id = body["data"]["id"].as_str().unwrap();

                let stored = stores.menu.get(id).await.unwrap().expect("menu item stored");
                assert_eq!(stored.name, "Soup");
                assert_eq!(stored.restaurant_id, "r-1");
            }

            #[tokio::test]
            async fn test_rest_rejected_create_persists_nothing() {
                let (server, stores) = make_server();

                let response = server
                    .post("/staff")
                    .add_header(AUTH, token())
                    .json(&json!({"restaurantId": "r-1", "name": "Bob", "schedule": "Mon-Fri"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["message"], "Invalid payload: missing position");
                assert!(stores.staff.is_empty().await.unwrap());
            }
        }
    };
}
