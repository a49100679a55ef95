//! REST integration test macro for order stores.
//!
//! The `order_rest_tests!` macro generates HTTP-level tests that drive a store
//! through the full REST round-trip:
//! JSON → HTTP request → handler → OrderStore → HTTP response → JSON.

/// Generate a REST integration test suite for a store backend.
///
/// `$store_factory` must produce an `impl OrderStore + 'static`, empty.
#[macro_export]
macro_rules! order_rest_tests {
    ($store_factory:expr) => {
        mod order_rest_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                test_server($store_factory)
            }

            // ==============================================================
            // Create
            // ==============================================================

            #[tokio::test]
            async fn test_create_returns_envelope_with_id() {
                let server = make_server().await;

                let response = server.post("/order/create").json(&soup_body()).await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["status"], 200);
                assert_eq!(body["message"], "success");
                let id = body["data"]["data"]["InsertedID"].as_str().unwrap();
                assert!(is_object_id(id));
            }

            #[tokio::test]
            async fn test_create_then_get_matches_input() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let response = server.get(&format!("/order/{}", id)).await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(
                    body["data"]["data"],
                    json!({ "id": id, "dish": "Soup", "price": 9.5, "server": "Alice", "table": 3 })
                );
            }

            #[tokio::test]
            async fn test_create_ids_are_distinct() {
                let server = make_server().await;
                let mut ids = Vec::new();
                for table in 1..=5 {
                    ids.push(create(&server, &order_body("Soup", 9.5, "Alice", table)).await);
                }

                let mut unique = ids.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), ids.len());
            }

            #[tokio::test]
            async fn test_create_missing_field_is_rejected_and_not_persisted() {
                let server = make_server().await;
                create(&server, &soup_body()).await;

                for field in ["dish", "price", "server", "table"] {
                    let mut body = soup_body();
                    body.as_object_mut().unwrap().remove(field);

                    let response = server.post("/order/create").json(&body).await;
                    response.assert_status(StatusCode::BAD_REQUEST);

                    let envelope: Value = response.json();
                    assert_eq!(envelope["status"], 400);
                    assert_eq!(envelope["message"], "error");
                    assert!(envelope["data"]["data"].as_str().unwrap().contains(field));
                }

                assert_eq!(count(&server).await, 1);
            }

            #[tokio::test]
            async fn test_create_empty_text_is_rejected() {
                let server = make_server().await;

                let response = server
                    .post("/order/create")
                    .json(&order_body("", 9.5, "Alice", 3))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(count(&server).await, 0);
            }

            #[tokio::test]
            async fn test_create_malformed_json() {
                let server = make_server().await;

                let response = server.post("/order/create").text("{\"dish\": \"Soup\",").await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["message"], "error");
                assert!(body["data"]["data"].is_string());
                assert_eq!(count(&server).await, 0);
            }

            #[tokio::test]
            async fn test_create_wrong_type() {
                let server = make_server().await;

                let response = server
                    .post("/order/create")
                    .json(&json!({ "dish": "Soup", "price": "cheap", "server": "Alice", "table": 3 }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(count(&server).await, 0);
            }

            // ==============================================================
            // Read
            // ==============================================================

            #[tokio::test]
            async fn test_list_is_bare_array() {
                let server = make_server().await;

                let empty: Value = server.get("/orders").await.json();
                assert_eq!(empty, json!([]));

                create(&server, &soup_body()).await;
                create(&server, &order_body("Salad", 7.0, "Bob", 4)).await;

                let response = server.get("/orders").await;
                response.assert_status_ok();

                let body: Value = response.json();
                let orders = body.as_array().expect("list-all must not be enveloped");
                assert_eq!(orders.len(), 2);
                assert_eq!(orders[0]["dish"], "Soup");
                assert_eq!(orders[1]["dish"], "Salad");
            }

            #[tokio::test]
            async fn test_get_unknown_id_is_500() {
                let server = make_server().await;

                let response = server.get("/order/65a1f0c2e4b0a1b2c3d4e5f6").await;
                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

                let body: Value = response.json();
                assert_eq!(body["status"], 500);
                assert_eq!(body["message"], "error");
                assert_eq!(body["data"]["data"], "mongo: no documents in result");
            }

            #[tokio::test]
            async fn test_get_malformed_id_is_500() {
                let server = make_server().await;
                create(&server, &soup_body()).await;

                let response = server.get("/order/not-an-id").await;
                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            }

            #[tokio::test]
            async fn test_orders_by_waiter() {
                let server = make_server().await;
                create(&server, &order_body("Soup", 9.5, "Alice", 1)).await;
                create(&server, &order_body("Salad", 7.0, "Bob", 2)).await;
                create(&server, &order_body("Steak", 25.0, "Alice", 3)).await;

                let response = server.get("/waiter/Alice").await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["message"], "success");
                let orders = body["data"]["data"].as_array().unwrap();
                let dishes: Vec<&str> = orders.iter().map(|o| o["dish"].as_str().unwrap()).collect();
                assert_eq!(dishes, vec!["Soup", "Steak"]);
            }

            #[tokio::test]
            async fn test_orders_by_waiter_decodes_path() {
                let server = make_server().await;
                create(&server, &order_body("Soup", 9.5, "Mary Ann", 1)).await;
                create(&server, &order_body("Soup", 9.5, "Mary", 2)).await;

                let body: Value = server.get("/waiter/Mary%20Ann").await.json();
                let orders = body["data"]["data"].as_array().unwrap();
                assert_eq!(orders.len(), 1);
                assert_eq!(orders[0]["server"], "Mary Ann");
            }

            #[tokio::test]
            async fn test_orders_by_unknown_waiter_is_empty() {
                let server = make_server().await;
                create(&server, &soup_body()).await;

                let body: Value = server.get("/waiter/Nobody").await.json();
                assert_eq!(body["data"]["data"], json!([]));
            }

            // ==============================================================
            // Update waiter
            // ==============================================================

            #[tokio::test]
            async fn test_update_waiter_changes_only_server() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let response = server
                    .put(&format!("/waiter/update/{}", id))
                    .json(&json!({ "server": "Bob" }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                let order = &body["data"]["data"];
                assert_eq!(order["id"], id.as_str());
                assert_eq!(order["server"], "Bob");
                assert_eq!(order["dish"], "Soup");
                assert_eq!(order["price"], 9.5);
                assert_eq!(order["table"], 3);

                let fetched: Value = server.get(&format!("/order/{}", id)).await.json();
                assert_eq!(fetched["data"]["data"], *order);
            }

            #[tokio::test]
            async fn test_update_waiter_unknown_id_returns_zero_value() {
                let server = make_server().await;

                let response = server
                    .put("/waiter/update/65a1f0c2e4b0a1b2c3d4e5f6")
                    .json(&json!({ "server": "Bob" }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["message"], "success");
                assert_eq!(
                    body["data"]["data"],
                    json!({ "id": "000000000000000000000000", "dish": "", "price": 0.0, "server": "", "table": 0 })
                );
            }

            #[tokio::test]
            async fn test_update_waiter_malformed_id_returns_zero_value() {
                let server = make_server().await;
                create(&server, &soup_body()).await;

                let response = server
                    .put("/waiter/update/xyz")
                    .json(&json!({ "server": "Bob" }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["data"]["data"]["dish"], "");

                let waiters: Value = server.get("/waiter/Bob").await.json();
                assert_eq!(waiters["data"]["data"], json!([]));
            }

            #[tokio::test]
            async fn test_update_waiter_without_server_clears_it() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let response = server
                    .put(&format!("/waiter/update/{}", id))
                    .json(&json!({}))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["data"]["data"]["server"], "");
                assert_eq!(body["data"]["data"]["dish"], "Soup");
            }

            #[tokio::test]
            async fn test_update_waiter_stores_empty_server() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let response = server
                    .put(&format!("/waiter/update/{}", id))
                    .json(&json!({ "server": "" }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["data"]["data"]["server"], "");
                assert_eq!(body["data"]["data"]["dish"], "Soup");

                let fetched: Value = server.get(&format!("/order/{}", id)).await.json();
                assert_eq!(fetched["data"]["data"]["server"], "");

                let waiters: Value = server.get("/waiter/Alice").await.json();
                assert_eq!(waiters["data"]["data"], json!([]));
            }

            #[tokio::test]
            async fn test_update_waiter_rejects_bad_body() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let malformed = server.put(&format!("/waiter/update/{}", id)).text("server=Bob").await;
                malformed.assert_status(StatusCode::BAD_REQUEST);

                let fetched: Value = server.get(&format!("/order/{}", id)).await.json();
                assert_eq!(fetched["data"]["data"]["server"], "Alice");
            }

            // ==============================================================
            // Full replace
            // ==============================================================

            #[tokio::test]
            async fn test_update_order_replaces_fields_and_keeps_id() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let response = server
                    .put(&format!("/order/update/{}", id))
                    .json(&order_body("Steak", 25.0, "Bob", 7))
                    .await;
                response.assert_status_ok();

                let expected = json!({ "id": id, "dish": "Steak", "price": 25.0, "server": "Bob", "table": 7 });
                let body: Value = response.json();
                assert_eq!(body["data"]["data"], expected);

                let fetched: Value = server.get(&format!("/order/{}", id)).await.json();
                assert_eq!(fetched["data"]["data"], expected);
            }

            #[tokio::test]
            async fn test_update_order_missing_field_leaves_record_unchanged() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let response = server
                    .put(&format!("/order/update/{}", id))
                    .json(&json!({ "dish": "Steak", "price": 25.0, "server": "Bob" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let fetched: Value = server.get(&format!("/order/{}", id)).await.json();
                assert_eq!(fetched["data"]["data"]["dish"], "Soup");
            }

            #[tokio::test]
            async fn test_update_order_unknown_id_returns_zero_value() {
                let server = make_server().await;

                let response = server
                    .put("/order/update/65a1f0c2e4b0a1b2c3d4e5f6")
                    .json(&soup_body())
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["data"]["data"]["id"], "000000000000000000000000");
                assert_eq!(count(&server).await, 0);
            }

            // ==============================================================
            // Delete
            // ==============================================================

            #[tokio::test]
            async fn test_delete_twice() {
                let server = make_server().await;
                let id = create(&server, &soup_body()).await;

                let first = server.delete(&format!("/order/delete/{}", id)).await;
                first.assert_status_ok();
                let body: Value = first.json();
                assert_eq!(
                    body,
                    json!({ "status": 200, "message": "success", "data": { "data": "Order successfully deleted." } })
                );

                let second = server.delete(&format!("/order/delete/{}", id)).await;
                second.assert_status(StatusCode::NOT_FOUND);
                let body: Value = second.json();
                assert_eq!(
                    body,
                    json!({ "status": 404, "message": "error", "data": { "data": "Order with specified ID not found." } })
                );
            }

            #[tokio::test]
            async fn test_delete_malformed_id_is_404() {
                let server = make_server().await;
                create(&server, &soup_body()).await;

                let response = server.delete("/order/delete/garbage").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(count(&server).await, 1);
            }

            // ==============================================================
            // End to end
            // ==============================================================

            #[tokio::test]
            async fn test_order_lifecycle() {
                let server = make_server().await;

                let id = create(&server, &soup_body()).await;

                let fetched: Value = server.get(&format!("/order/{}", id)).await.json();
                assert_eq!(fetched["status"], 200);
                assert_eq!(fetched["data"]["data"]["dish"], "Soup");
                assert_eq!(fetched["data"]["data"]["server"], "Alice");

                let updated: Value = server
                    .put(&format!("/waiter/update/{}", id))
                    .json(&json!({ "server": "Bob" }))
                    .await
                    .json();
                assert_eq!(updated["data"]["data"]["server"], "Bob");
                assert_eq!(updated["data"]["data"]["dish"], "Soup");

                server
                    .delete(&format!("/order/delete/{}", id))
                    .await
                    .assert_status_ok();
                server
                    .delete(&format!("/order/delete/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_health() {
                let server = make_server().await;

                let body: Value = server.get("/health").await.json();
                assert_eq!(body["status"], "ok");
            }
        }
    };
}
