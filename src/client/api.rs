use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::ClientError;
use crate::dtos::bill::{CreateBillRequest, DeleteBillResponse};
use crate::dtos::conrod::CreateConrodRequest;
use crate::dtos::product::CreateProductRequest;
use crate::dtos::production::CreateProductionRequest;
use crate::dtos::{DeletedResponse, UpdateQuantityRequest};
use crate::models::{bill::Bill, conrod::Conrod, product::Product, production::ProductionRecord};

/// One method per REST operation, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
                .or_else(|| (!text.trim().is_empty()).then(|| text.trim().to_owned()))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_owned());

            tracing::debug!(status = status.as_u16(), %message, "Request rejected");
            return Err(ClientError::Status { status: status.as_u16(), message });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.send(self.http.get(self.url("/products"))).await
    }

    pub async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ClientError> {
        self.send(self.http.post(self.url("/products")).json(req)).await
    }

    pub async fn update_product_quantity(&self, id: &str, quantity: i64) -> Result<Product, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/products/{id}")))
                .json(&UpdateQuantityRequest { quantity }),
        )
        .await
    }

    pub async fn delete_product(&self, id: &str) -> Result<DeletedResponse, ClientError> {
        self.send(self.http.delete(self.url(&format!("/products/{id}")))).await
    }

    pub async fn list_conrods(&self) -> Result<Vec<Conrod>, ClientError> {
        self.send(self.http.get(self.url("/conrods"))).await
    }

    pub async fn create_conrod(&self, req: &CreateConrodRequest) -> Result<Conrod, ClientError> {
        self.send(self.http.post(self.url("/conrods")).json(req)).await
    }

    pub async fn delete_conrod(&self, id: &str) -> Result<DeletedResponse, ClientError> {
        self.send(self.http.delete(self.url(&format!("/conrods/{id}")))).await
    }

    pub async fn list_production(&self) -> Result<Vec<ProductionRecord>, ClientError> {
        self.send(self.http.get(self.url("/production"))).await
    }

    pub async fn create_production(
        &self,
        req: &CreateProductionRequest,
    ) -> Result<ProductionRecord, ClientError> {
        self.send(self.http.post(self.url("/production")).json(req)).await
    }

    pub async fn update_production_quantity(
        &self,
        id: &str,
        quantity: i64,
    ) -> Result<ProductionRecord, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/production/{id}")))
                .json(&UpdateQuantityRequest { quantity }),
        )
        .await
    }

    pub async fn delete_production(&self, id: &str) -> Result<DeletedResponse, ClientError> {
        self.send(self.http.delete(self.url(&format!("/production/{id}")))).await
    }

    pub async fn list_bills(&self) -> Result<Vec<Bill>, ClientError> {
        self.send(self.http.get(self.url("/bills"))).await
    }

    pub async fn create_bill(&self, req: &CreateBillRequest) -> Result<Bill, ClientError> {
        self.send(self.http.post(self.url("/bills")).json(req)).await
    }

    pub async fn delete_bill(&self, id: &str) -> Result<DeleteBillResponse, ClientError> {
        self.send(self.http.delete(self.url(&format!("/bills/{id}")))).await
    }
}
