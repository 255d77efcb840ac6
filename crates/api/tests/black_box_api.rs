use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use reqwest::StatusCode;

use vendora_api::app::services::AppServices;
use vendora_auth::{Claims, Hs256TokenCodec, UserRole};
use vendora_core::{DateRange, OrderId, ProductId, StoreError, UserId};
use vendora_infra::{InMemoryOrderStore, InMemoryProductStore};
use vendora_orders::{LineItem, Order, OrderStatus, OrderStore};
use vendora_products::{Product, ProductStatus, ProductStore};
use vendora_stats::OwnershipLookup;

struct TestServer {
    base_url: String,
    orders: Arc<InMemoryOrderStore>,
    products: Arc<InMemoryProductStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the prod router on an ephemeral port, backed by fresh
    /// in-memory stores the test can seed directly.
    async fn spawn(jwt_secret: &str) -> Self {
        let orders = Arc::new(InMemoryOrderStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        let services = Arc::new(AppServices::new(
            orders.clone(),
            products.clone(),
            OwnershipLookup::Batched,
        ));

        let (base_url, handle) = serve(jwt_secret, services).await;

        Self {
            base_url,
            orders,
            products,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    jwt_secret: &str,
    services: Arc<AppServices>,
) -> (String, tokio::task::JoinHandle<()>) {
    let app = vendora_api::app::build_app_with_services(jwt_secret.to_string(), services);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, handle)
}

fn mint_jwt(jwt_secret: &str, user_id: UserId, role: UserRole) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        role,
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    Hs256TokenCodec::new(jwt_secret.as_bytes())
        .encode(&claims)
        .expect("failed to encode jwt")
}

fn item(product_id: ProductId, name: &str, price: f64, quantity: i64, images: &[&str]) -> LineItem {
    LineItem {
        product_id,
        name: name.to_string(),
        price,
        quantity,
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

fn completed_order(user_id: UserId, items: Vec<LineItem>, placed_at: DateTime<Utc>) -> Order {
    Order::new(user_id, items, placed_at).with_status(OrderStatus::Completed)
}

fn catalog_product(seller_id: UserId, name: &str, price: f64, created_at: DateTime<Utc>) -> Product {
    Product {
        id: ProductId::new(),
        seller_id,
        name: name.to_string(),
        price,
        status: ProductStatus::Available,
        // Listability is judged against the wall clock at request time, so
        // the expiry must be relative to the real now, not the seeded dates.
        expiry_date: Utc::now() + ChronoDuration::days(365),
        images: vec![],
        created_at,
    }
}

// -------------------------
// Auth middleware
// -------------------------

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/orders", srv.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn whoami_reflects_token_identity() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let user_id = UserId::new();
    let token = mint_jwt(jwt_secret, user_id, UserRole::Seller);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["userId"].as_str().unwrap(), user_id.to_string());
    assert_eq!(body["role"].as_str().unwrap(), "seller");
}

#[tokio::test]
async fn health_is_public() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

// -------------------------
// Seller statistics
// -------------------------

#[tokio::test]
async fn seller_stats_happy_path() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let seller_id = UserId::new();
    let buyer_id = UserId::new();
    let placed_at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

    let product1 = catalog_product(seller_id, "Widget", 100.0, placed_at - ChronoDuration::days(30));
    let product2 = catalog_product(seller_id, "Gadget", 50.0, placed_at - ChronoDuration::days(30));
    let product1_id = product1.id;
    let product2_id = product2.id;
    srv.products.insert(product1);
    srv.products.insert(product2);

    srv.orders.insert(completed_order(
        buyer_id,
        vec![
            item(product1_id, "Widget", 100.0, 2, &["image1.jpg"]),
            item(product2_id, "Gadget", 50.0, 1, &[]),
        ],
        placed_at,
    ));

    let token = mint_jwt(jwt_secret, seller_id, UserRole::Seller);
    let client = reqwest::Client::new();
    let res = client
        .get(format!(
            "{}/stats/seller-stats?startDate=2024-03-01&endDate=2024-03-31",
            srv.base_url
        ))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Seller stats retrieved successfully"
    );
    assert_eq!(body["totalAmount"].as_f64().unwrap(), 250.0);
    assert_eq!(body["totalSoldItems"].as_i64().unwrap(), 3);

    let lines = body["orders"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["productId"].as_str().unwrap(), product1_id.to_string());
    assert_eq!(lines[0]["amount"].as_f64().unwrap(), 200.0);
    assert_eq!(lines[0]["images"][0].as_str().unwrap(), "image1.jpg");
    assert_eq!(lines[1]["productId"].as_str().unwrap(), product2_id.to_string());
    assert_eq!(lines[1]["amount"].as_f64().unwrap(), 50.0);
}

#[tokio::test]
async fn seller_stats_requires_both_dates() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let token = mint_jwt(jwt_secret, UserId::new(), UserRole::Seller);
    let client = reqwest::Client::new();
    // An empty-valued parameter reads as missing, not as a malformed date.
    for query in [
        "startDate=2024-03-01",
        "startDate=&endDate=2024-03-05",
        "startDate=%20%20&endDate=2024-03-05",
    ] {
        let res = client
            .get(format!("{}/stats/seller-stats?{query}", srv.base_url))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query: {query}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body["message"].as_str().unwrap(),
            "startDate and endDate are required",
            "query: {query}"
        );
    }
}

#[tokio::test]
async fn seller_stats_rejects_malformed_dates() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let token = mint_jwt(jwt_secret, UserId::new(), UserRole::Seller);
    let client = reqwest::Client::new();
    let res = client
        .get(format!(
            "{}/stats/seller-stats?startDate=not-a-date&endDate=2024-03-31",
            srv.base_url
        ))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "startDate and endDate must be ISO-8601 dates"
    );
}

#[tokio::test]
async fn seller_stats_reports_empty_window() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let token = mint_jwt(jwt_secret, UserId::new(), UserRole::Seller);
    let client = reqwest::Client::new();
    let res = client
        .get(format!(
            "{}/stats/seller-stats?startDate=2024-03-01&endDate=2024-03-31",
            srv.base_url
        ))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "No orders found for the given time frame"
    );
}

#[tokio::test]
async fn seller_stats_reports_foreign_items() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let seller_id = UserId::new();
    let other_seller = UserId::new();
    let placed_at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

    // Completed order in range, but the product belongs to someone else.
    let foreign = catalog_product(other_seller, "Foreign", 10.0, placed_at - ChronoDuration::days(5));
    let foreign_id = foreign.id;
    srv.products.insert(foreign);
    srv.orders.insert(completed_order(
        UserId::new(),
        vec![item(foreign_id, "Foreign", 10.0, 1, &[])],
        placed_at,
    ));

    let token = mint_jwt(jwt_secret, seller_id, UserRole::Seller);
    let client = reqwest::Client::new();
    let res = client
        .get(format!(
            "{}/stats/seller-stats?startDate=2024-03-01&endDate=2024-03-31",
            srv.base_url
        ))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "No items found for the seller in the given time frame"
    );
}

#[tokio::test]
async fn seller_stats_is_seller_only() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let client = reqwest::Client::new();
    for role in [UserRole::Buyer, UserRole::Admin] {
        let token = mint_jwt(jwt_secret, UserId::new(), role);
        let res = client
            .get(format!(
                "{}/stats/seller-stats?startDate=2024-03-01&endDate=2024-03-31",
                srv.base_url
            ))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["message"].as_str().unwrap(), "Forbidden");
    }
}

// -------------------------
// Orders
// -------------------------

#[tokio::test]
async fn buyer_sees_own_orders_or_404() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let buyer_id = UserId::new();
    let placed_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    srv.orders.insert(Order::new(
        buyer_id,
        vec![item(ProductId::new(), "Widget", 25.0, 1, &[])],
        placed_at,
    ));
    srv.orders.insert(Order::new(
        buyer_id,
        vec![item(ProductId::new(), "Gadget", 12.5, 2, &[])],
        placed_at + ChronoDuration::hours(1),
    ));

    let client = reqwest::Client::new();

    let token = mint_jwt(jwt_secret, buyer_id, UserRole::Buyer);
    let res = client
        .get(format!("{}/orders", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Orders retrieved successfully"
    );
    assert_eq!(body["orders"].as_array().unwrap().len(), 2);

    // A different buyer has nothing.
    let other_token = mint_jwt(jwt_secret, UserId::new(), UserRole::Buyer);
    let res = client
        .get(format!("{}/orders", srv.base_url))
        .bearer_auth(other_token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "User has no orders");
}

#[tokio::test]
async fn order_lookup_is_scoped_to_caller() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let buyer_id = UserId::new();
    let placed_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let order = Order::new(
        buyer_id,
        vec![item(ProductId::new(), "Widget", 25.0, 1, &[])],
        placed_at,
    );
    let order_id = order.id;
    srv.orders.insert(order);

    let client = reqwest::Client::new();

    let token = mint_jwt(jwt_secret, buyer_id, UserRole::Buyer);
    let res = client
        .get(format!("{}/orders/{}", srv.base_url, order_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Order retrieved successfully"
    );
    assert_eq!(body["order"]["id"].as_str().unwrap(), order_id.to_string());

    // Another buyer cannot see it.
    let other_token = mint_jwt(jwt_secret, UserId::new(), UserRole::Buyer);
    let res = client
        .get(format!("{}/orders/{}", srv.base_url, order_id))
        .bearer_auth(other_token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Order not found");

    // Malformed id is a 400, not a store miss.
    let res = client
        .get(format!("{}/orders/not-a-uuid", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Invalid order id");
}

#[tokio::test]
async fn admin_lists_all_orders() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let token = mint_jwt(jwt_secret, UserId::new(), UserRole::Admin);
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/orders/all", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "No orders found");

    let placed_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    srv.orders.insert(Order::new(
        UserId::new(),
        vec![item(ProductId::new(), "Widget", 25.0, 1, &[])],
        placed_at,
    ));
    srv.orders.insert(Order::new(
        UserId::new(),
        vec![item(ProductId::new(), "Gadget", 12.5, 2, &[])],
        placed_at + ChronoDuration::hours(1),
    ));

    let res = client
        .get(format!("{}/orders/all", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Orders retrieved successfully"
    );
    assert_eq!(body["orders"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn admin_updates_order_status() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let placed_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let order = Order::new(
        UserId::new(),
        vec![item(ProductId::new(), "Widget", 25.0, 1, &[])],
        placed_at,
    );
    let order_id = order.id;
    srv.orders.insert(order);

    let admin_token = mint_jwt(jwt_secret, UserId::new(), UserRole::Admin);
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/orders/{}/status", srv.base_url, order_id))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({"status": "Shipping"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Order status updated successfully"
    );
    assert_eq!(body["order"]["status"].as_str().unwrap(), "Shipping");

    // Unknown literal lists the accepted values.
    let res = client
        .patch(format!("{}/orders/{}/status", srv.base_url, order_id))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({"status": "Refunded"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("expected one of"), "got: {message}");
    assert!(message.contains("Completed"), "got: {message}");

    // Unknown order id.
    let res = client
        .patch(format!("{}/orders/{}/status", srv.base_url, OrderId::new()))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({"status": "Paid"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Order not found");

    // Buyers cannot touch the admin surface.
    let buyer_token = mint_jwt(jwt_secret, UserId::new(), UserRole::Buyer);
    let res = client
        .patch(format!("{}/orders/{}/status", srv.base_url, order_id))
        .bearer_auth(buyer_token)
        .json(&serde_json::json!({"status": "Paid"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Forbidden");
}

// -------------------------
// Catalog
// -------------------------

#[tokio::test]
async fn catalog_listing_is_public_and_paginated() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;

    let seller_id = UserId::new();
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    for i in 0..7 {
        srv.products.insert(catalog_product(
            seller_id,
            &format!("Product {i}"),
            10.0 + i as f64,
            base + ChronoDuration::minutes(i),
        ));
    }

    // Neither of these may show up in the listing.
    let mut expired = catalog_product(seller_id, "Expired", 5.0, base);
    expired.expiry_date = Utc::now() - ChronoDuration::days(1);
    srv.products.insert(expired);
    let mut off_shelf = catalog_product(seller_id, "Off shelf", 5.0, base);
    off_shelf.status = ProductStatus::Unavailable;
    srv.products.insert(off_shelf);

    let client = reqwest::Client::new();

    // No token needed.
    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"].as_str().unwrap(),
        "Products retrieved successfully"
    );
    assert_eq!(body["products"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["limit"].as_i64().unwrap(), 5);
    assert_eq!(body["pagination"]["page"].as_i64().unwrap(), 1);
    assert_eq!(body["pagination"]["totalPages"].as_i64().unwrap(), 2);

    let res = client
        .get(format!("{}/products?page=2", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["page"].as_i64().unwrap(), 2);

    for query in [
        "page=0",
        "limit=0",
        "page=abc",
        "limit=-3",
        // i64::MAX parses fine but the row skip it implies does not fit.
        "page=9223372036854775807&limit=5",
    ] {
        let res = client
            .get(format!("{}/products?{query}", srv.base_url))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query: {query}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body["message"].as_str().unwrap(),
            "Invalid pagination parameters"
        );
    }
}

// -------------------------
// Store failure passthrough
// -------------------------

#[derive(Debug, Default)]
struct FailingOrderStore;

#[async_trait::async_trait]
impl OrderStore for FailingOrderStore {
    async fn find_completed_in_range(&self, _range: DateRange) -> Result<Vec<Order>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn list_for_user(&self, _user_id: UserId) -> Result<Vec<Order>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn find_for_user(
        &self,
        _order_id: OrderId,
        _user_id: UserId,
    ) -> Result<Option<Order>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn update_status(
        &self,
        _order_id: OrderId,
        _status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        Err(StoreError::database("Database error"))
    }
}

#[derive(Debug, Default)]
struct FailingProductStore;

#[async_trait::async_trait]
impl ProductStore for FailingProductStore {
    async fn find_owned_by_seller(
        &self,
        _product_id: ProductId,
        _seller_id: UserId,
    ) -> Result<Option<Product>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn filter_owned_by_seller(
        &self,
        _seller_id: UserId,
        _product_ids: &[ProductId],
    ) -> Result<Vec<ProductId>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn list_available(
        &self,
        _now: DateTime<Utc>,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::database("Database error"))
    }

    async fn count_available(&self, _now: DateTime<Utc>) -> Result<i64, StoreError> {
        Err(StoreError::database("Database error"))
    }
}

#[tokio::test]
async fn store_failure_message_passes_through_on_stats_and_orders() {
    let jwt_secret = "test-secret";
    let services = Arc::new(AppServices::new(
        Arc::new(FailingOrderStore),
        Arc::new(FailingProductStore),
        OwnershipLookup::Batched,
    ));
    let (base_url, handle) = serve(jwt_secret, services).await;

    let client = reqwest::Client::new();

    let seller_token = mint_jwt(jwt_secret, UserId::new(), UserRole::Seller);
    let res = client
        .get(format!(
            "{base_url}/stats/seller-stats?startDate=2024-03-01&endDate=2024-03-31"
        ))
        .bearer_auth(seller_token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Database error");

    let buyer_token = mint_jwt(jwt_secret, UserId::new(), UserRole::Buyer);
    let res = client
        .get(format!("{base_url}/orders"))
        .bearer_auth(buyer_token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Database error");

    handle.abort();
}

#[tokio::test]
async fn catalog_failure_keeps_its_own_shape() {
    let jwt_secret = "test-secret";
    let services = Arc::new(AppServices::new(
        Arc::new(FailingOrderStore),
        Arc::new(FailingProductStore),
        OwnershipLookup::Batched,
    ));
    let (base_url, handle) = serve(jwt_secret, services).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"].as_str().unwrap(), "Internal server error");
    assert_eq!(body["error"].as_str().unwrap(), "Database error");

    handle.abort();
}
