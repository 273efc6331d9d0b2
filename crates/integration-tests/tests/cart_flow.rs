//! Integration tests for the cart lifecycle and ownership scoping.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p cartwheel-api)
//!
//! Run with: cargo test -p cartwheel-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

fn base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix}-{nanos}@example.com")
}

/// Register a fresh user and return a client sending its bearer token.
async fn authenticated_client(prefix: &str) -> Client {
    let bootstrap = Client::new();
    let resp = bootstrap
        .post(format!("{}/auth/register", base_url()))
        .json(&json!({ "email": unique_email(prefix), "password": "hunter2-hunter2" }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to read response body");
    let token = body["access_token"].as_str().expect("missing access token");

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::AUTHORIZATION,
        format!("Bearer {token}").parse().expect("invalid header"),
    );

    Client::builder()
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
}

/// Create a catalog product and return its id.
async fn create_product(client: &Client, name: &str) -> i64 {
    let resp = client
        .post(format!("{}/products", base_url()))
        .json(&json!({
            "name": name,
            "description": "integration test product",
            "price": 9.99,
            "images": [],
            "discount": 0.0,
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to read response body");
    body["id"].as_i64().expect("missing product id")
}

async fn add_item(client: &Client, product_id: i64, quantity: i64) -> (StatusCode, Value) {
    let resp = client
        .post(format!("{}/cart/items", base_url()))
        .json(&json!({ "product_id": product_id, "quantity": quantity }))
        .send()
        .await
        .expect("Failed to add item");

    let status = resp.status();
    let body = resp.json().await.expect("Failed to read response body");
    (status, body)
}

async fn get_cart(client: &Client) -> Value {
    let resp = client
        .get(format!("{}/cart", base_url()))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to read response body")
}

// ============================================================================
// Cart Lifecycle
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_auto_created_empty() {
    let client = authenticated_client("cart-empty").await;

    let cart = get_cart(&client).await;
    assert!(cart["id"].as_i64().unwrap_or(0) > 0);
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(0));

    // A second fetch resolves the same cart.
    let again = get_cart(&client).await;
    assert_eq!(again["id"], cart["id"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_adding_same_product_aggregates_quantity() {
    let client = authenticated_client("cart-agg").await;
    let product_id = create_product(&client, "Aggregating widget").await;

    let (status, item) = add_item(&client, product_id, 2).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["quantity"].as_i64(), Some(2));

    let (status, item) = add_item(&client, product_id, 2).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["quantity"].as_i64(), Some(4));

    // One line in the cart, not two.
    let cart = get_cart(&client).await;
    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"].as_i64(), Some(4));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_non_positive_add_quantity_means_one() {
    let client = authenticated_client("cart-qty").await;
    let product_id = create_product(&client, "Single widget").await;

    let (status, item) = add_item(&client, product_id, 0).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["quantity"].as_i64(), Some(1));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_update_and_remove_item() {
    let client = authenticated_client("cart-upd").await;
    let product_id = create_product(&client, "Updatable widget").await;

    let (_, item) = add_item(&client, product_id, 3).await;
    let item_id = item["id"].as_i64().expect("missing item id");

    let resp = client
        .patch(format!("{}/cart/items/{item_id}", base_url()))
        .json(&json!({ "quantity": 7 }))
        .send()
        .await
        .expect("Failed to update item");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read response body");
    assert_eq!(body["quantity"].as_i64(), Some(7));

    let resp = client
        .delete(format!("{}/cart/items/{item_id}", base_url()))
        .send()
        .await
        .expect("Failed to remove item");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let cart = get_cart(&client).await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_clear_cart_is_idempotent() {
    let client = authenticated_client("cart-clear").await;
    let product_id = create_product(&client, "Clearable widget").await;
    add_item(&client, product_id, 2).await;

    for _ in 0..2 {
        let resp = client
            .delete(format!("{}/cart", base_url()))
            .send()
            .await
            .expect("Failed to clear cart");
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let cart = get_cart(&client).await;
    assert_eq!(cart["items"].as_array().map(Vec::len), Some(0));
}

// ============================================================================
// Ownership Scoping
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_foreign_cart_item_surfaces_as_not_found() {
    let alice = authenticated_client("cart-alice").await;
    let bob = authenticated_client("cart-bob").await;

    let product_id = create_product(&alice, "Private widget").await;
    let (_, item) = add_item(&alice, product_id, 2).await;
    let item_id = item["id"].as_i64().expect("missing item id");

    // Bob can neither update nor delete Alice's item.
    let resp = bob
        .patch(format!("{}/cart/items/{item_id}", base_url()))
        .json(&json!({ "quantity": 1 }))
        .send()
        .await
        .expect("Failed to update item");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = bob
        .delete(format!("{}/cart/items/{item_id}", base_url()))
        .send()
        .await
        .expect("Failed to remove item");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Alice's item is untouched.
    let cart = get_cart(&alice).await;
    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"].as_i64(), Some(2));
}
