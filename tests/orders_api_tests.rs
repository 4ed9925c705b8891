//! HTTP round-trip tests for the order and contact endpoints
//!
//! JSON → HTTP request → handler → OrderStore → HTTP response → JSON.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use storefront::prelude::*;

fn make_server() -> TestServer {
    let router = ServerBuilder::new()
        .with_order_store(InMemoryOrderStore::new())
        .build()
        .unwrap();
    TestServer::try_new(router).unwrap()
}

fn shirt_order() -> Value {
    json!({
        "product": {"name": "Shirt", "price": 1000},
        "quantity": 2,
        "customerDetails": {
            "fullName": "A",
            "mobileNumber": "123",
            "email": "a@b.com",
            "address": "X",
            "city": "Y",
            "province": "Z"
        }
    })
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_order() {
    let server = make_server();

    let response = server.post("/orders").json(&shirt_order()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order created successfully");

    let order = &body["order"];
    assert_eq!(order["id"], 1);
    assert_eq!(order["subtotal"], 2000);
    assert_eq!(order["shipping"], 0);
    assert_eq!(order["total"], 2000);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["whatsappSent"], false);
    assert_eq!(order["selectedSize"], "");
    assert_eq!(order["selectedColor"], "");
    assert!(order["createdAt"].as_str().is_some());

    let url = body["whatsappUrl"].as_str().unwrap();
    assert!(url.starts_with("https://api.whatsapp.com/send/?phone=923261300101&text="));
    assert!(url.ends_with("&type=phone_number&app_absent=0"));
}

#[tokio::test]
async fn test_total_is_price_times_quantity() {
    let server = make_server();

    for (price, quantity) in [(250, 4), (1999, 1), (75, 12)] {
        let mut payload = shirt_order();
        payload["product"]["price"] = json!(price);
        payload["quantity"] = json!(quantity);

        let body: Value = server.post("/orders").json(&payload).await.json();
        assert_eq!(body["order"]["total"], json!(price * quantity));
    }
}

#[tokio::test]
async fn test_sequential_ids() {
    let server = make_server();

    for expected in 1..=5 {
        let body: Value = server.post("/orders").json(&shirt_order()).await.json();
        assert_eq!(body["order"]["id"], expected);
    }

    let body: Value = server.get("/orders").await.json();
    let ids: Vec<i64> = body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_deep_link_carries_size_and_color_rules() {
    let server = make_server();

    let mut payload = shirt_order();
    payload["selectedSize"] = json!("");
    payload["selectedColor"] = json!("Red");

    let body: Value = server.post("/orders").json(&payload).await.json();
    let url = body["whatsappUrl"].as_str().unwrap();

    // "*Color:* Red" encoded
    assert!(url.contains("%2AColor%3A%2A%20Red"));
    assert!(!url.contains("%2ASize%3A%2A"));
    // "Rs. 2,000"
    assert!(url.contains("Rs.%202%2C000"));
}

#[tokio::test]
async fn test_product_extra_fields_are_kept() {
    let server = make_server();

    let mut payload = shirt_order();
    payload["product"]["image"] = json!("/img/shirt.png");

    let body: Value = server.post("/orders").json(&payload).await.json();
    assert_eq!(body["order"]["product"]["image"], "/img/shirt.png");
}

#[tokio::test]
async fn test_numeric_mobile_number_is_accepted() {
    let server = make_server();

    let mut payload = shirt_order();
    payload["customerDetails"]["mobileNumber"] = json!(3001234567u64);

    let response = server.post("/orders").json(&payload).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(
        body["order"]["customerDetails"]["mobileNumber"],
        json!(3001234567u64)
    );
    // "*Mobile Number:* 3001234567"
    let url = body["whatsappUrl"].as_str().unwrap();
    assert!(url.contains("%2AMobile%20Number%3A%2A%203001234567%0A"));
}

#[tokio::test]
async fn test_float_price_keeps_float_total() {
    let server = make_server();

    let mut payload = shirt_order();
    payload["product"]["price"] = json!(1000.0);

    let response = server.post("/orders").json(&payload).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["order"]["subtotal"], json!(2000.0));
    assert_eq!(body["order"]["total"], json!(2000.0));
    assert!(body["order"]["total"].is_f64());
    // "Rs. 2,000.0"
    let url = body["whatsappUrl"].as_str().unwrap();
    assert!(url.contains("Rs.%202%2C000.0%0A"));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_missing_customer_email_returns_400() {
    let server = make_server();

    let mut payload = shirt_order();
    payload["customerDetails"]
        .as_object_mut()
        .unwrap()
        .remove("email");

    let response = server.post("/orders").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required customer field: email");
}

#[tokio::test]
async fn test_missing_top_level_field_returns_400() {
    let server = make_server();

    let mut payload = shirt_order();
    payload.as_object_mut().unwrap().remove("quantity");

    let response = server.post("/orders").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required field: quantity");
}

#[tokio::test]
async fn test_rejected_order_is_not_stored() {
    let server = make_server();

    let mut payload = shirt_order();
    payload["product"] = json!({"name": "Shirt"});
    let response = server.post("/orders").json(&payload).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = server.get("/orders").await.json();
    assert_eq!(body["orders"], json!([]));

    let body: Value = server.post("/orders").json(&shirt_order()).await.json();
    assert_eq!(body["order"]["id"], 1);
}

#[tokio::test]
async fn test_invalid_json_returns_400() {
    let server = make_server();

    let response = server.post("/orders").text("{not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_get_returns_created_order() {
    let server = make_server();

    let created: Value = server.post("/orders").json(&shirt_order()).await.json();

    let response = server.get("/orders/1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["order"], created["order"]);
    assert_eq!(body["order"]["whatsappSent"], false);
}

#[tokio::test]
async fn test_get_unknown_order_returns_404() {
    let server = make_server();

    let response = server.get("/orders/999999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"error": "Order not found"}));
}

#[tokio::test]
async fn test_get_non_numeric_id_returns_400() {
    let server = make_server();

    let response = server.get("/orders/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_list_empty() {
    let server = make_server();

    let response = server.get("/orders").await;
    response.assert_status_ok();
    response.assert_json(&json!({"orders": []}));
}

// =============================================================================
// Mark sent
// =============================================================================

#[tokio::test]
async fn test_mark_sent_twice_stays_sent() {
    let server = make_server();
    server.post("/orders").json(&shirt_order()).await;

    for _ in 0..2 {
        let response = server.post("/orders/1/whatsapp-sent").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "message": "Order marked as WhatsApp sent"
        }));

        let body: Value = server.get("/orders/1").await.json();
        assert_eq!(body["order"]["whatsappSent"], true);
        assert!(body["order"]["whatsappSentAt"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_mark_sent_non_numeric_id_returns_400() {
    let server = make_server();

    let response = server.post("/orders/abc/whatsapp-sent").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_mark_sent_unknown_order_returns_404() {
    let server = make_server();

    let response = server.post("/orders/3/whatsapp-sent").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"error": "Order not found"}));
}

// =============================================================================
// Contact
// =============================================================================

#[tokio::test]
async fn test_contact_form() {
    let server = make_server();

    let response = server
        .post("/contact")
        .json(&json!({"name": "Sara", "email": "sara@example.com", "message": "Hi"}))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "success": true,
        "message": "Contact form submitted successfully"
    }));

    // Not stored alongside orders
    let body: Value = server.get("/orders").await.json();
    assert_eq!(body["orders"], json!([]));
}

#[tokio::test]
async fn test_contact_form_accepts_numeric_values() {
    let server = make_server();

    let response = server
        .post("/contact")
        .json(&json!({"name": 7, "email": "sara@example.com", "message": 12345}))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_contact_form_missing_field() {
    let server = make_server();

    let response = server
        .post("/contact")
        .json(&json!({"name": "Sara", "email": "", "message": "Hi"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Missing required field: email"}));
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test]
async fn test_api_prefix_and_phone_from_config() {
    let config = StorefrontConfig {
        api_prefix: "/api".to_string(),
        whatsapp_phone: "15550001111".to_string(),
        ..StorefrontConfig::default()
    };
    let router = ServerBuilder::new().with_config(config).build().unwrap();
    let server = TestServer::try_new(router).unwrap();

    let response = server.post("/api/orders").json(&shirt_order()).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(
        body["whatsappUrl"]
            .as_str()
            .unwrap()
            .starts_with("https://api.whatsapp.com/send/?phone=15550001111&text=")
    );

    server.get("/orders").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_health() {
    let server = make_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok", "service": "storefront-orders"}));
}
