#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use globe_erp::{build_app, database, state::AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over a fresh database, in memory unless a URL is given.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_database_url("sqlite::memory:").await
    }

    pub async fn with_database_url(url: &str) -> Self {
        let pool = database::create_pool(url)
            .await
            .expect("failed to create test database");
        let state = AppState::new(pool);
        Self { router: build_app(state.clone()), state }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    // ---- fixtures ----

    pub async fn create_pin(&self, name: &str, quantity: i64) -> Value {
        self.create_product(json!({
            "productName": name,
            "productType": "Pins",
            "dimensions": { "height": 30.0, "diameter": 8.0 },
            "quantity": quantity,
            "date": "2024-06-01"
        }))
        .await
    }

    pub async fn create_ball_bearing(&self, name: &str, quantity: i64) -> Value {
        self.create_product(json!({
            "productName": name,
            "productType": "Ball Bearings",
            "dimensions": { "diameter": 6.35 },
            "quantity": quantity,
            "date": "2024-06-01"
        }))
        .await
    }

    pub async fn create_product(&self, body: Value) -> Value {
        let (status, product) = self.post("/api/products", body).await;
        assert_eq!(status, StatusCode::CREATED, "{product}");
        product
    }

    pub async fn create_conrod(&self, name: &str, pin: &str, ball_bearing: &str) -> Value {
        let (status, conrod) = self
            .post(
                "/api/conrods",
                json!({
                    "name": name,
                    "dimensions": { "smallEndDiameter": 18.0, "bigEndDiameter": 42.0, "centerDistance": 110.5 },
                    "pin": pin,
                    "ballBearing": ball_bearing
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{conrod}");
        conrod
    }

    pub async fn create_production(&self, conrod_id: &str, quantity: i64) -> Value {
        let (status, record) = self
            .post(
                "/api/production",
                json!({ "conrodId": conrod_id, "quantity": quantity, "date": "2024-06-02" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{record}");
        record
    }

    pub async fn create_bill(&self, production_id: &str, quantity: i64, amount: f64) -> Value {
        let (status, bill) = self
            .post(
                "/api/bills",
                json!({ "invoiceNo": "INV-001", "productId": production_id, "quantity": quantity, "amount": amount }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{bill}");
        bill
    }

    pub async fn product_named(&self, name: &str) -> Option<Value> {
        let (_, products) = self.get("/api/products").await;
        products
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["productName"] == name)
            .cloned()
    }

    pub async fn production_quantity(&self, id: &str) -> Option<i64> {
        let (_, records) = self.get("/api/production").await;
        records
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["id"] == id)
            .map(|r| r["quantity"].as_i64().unwrap())
    }
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("record has an id").to_string()
}
