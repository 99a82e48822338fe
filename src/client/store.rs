use std::collections::BTreeMap;

use super::views::{self, BillingHistoryRow, BillingTotals};
use super::{ApiClient, ClientError};
use crate::dtos::bill::{CreateBillRequest, DeleteBillResponse};
use crate::dtos::conrod::CreateConrodRequest;
use crate::dtos::product::CreateProductRequest;
use crate::dtos::production::CreateProductionRequest;
use crate::models::{
    bill::Bill,
    conrod::Conrod,
    product::{Product, ProductType},
    production::ProductionRecord,
};

/// Client-side workshop state.
///
/// The server is the source of truth. Every mutation goes over the wire first
/// and only the confirmed result is applied to the cache. Workflows that touch
/// other resources on the server reload those lists afterwards.
#[derive(Debug)]
pub struct WorkshopStore {
    api: ApiClient,
    products: Vec<Product>,
    conrods: Vec<Conrod>,
    production: Vec<ProductionRecord>,
    bills: Vec<Bill>,
}

impl WorkshopStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            products: Vec::new(),
            conrods: Vec::new(),
            production: Vec::new(),
            bills: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn conrods(&self) -> &[Conrod] {
        &self.conrods
    }

    pub fn production(&self) -> &[ProductionRecord] {
        &self.production
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.products = self.api.list_products().await?;
        self.conrods = self.api.list_conrods().await?;
        self.production = self.api.list_production().await?;
        self.bills = self.api.list_bills().await?;
        Ok(())
    }

    // ---- products ----

    pub async fn add_product(&mut self, req: CreateProductRequest) -> Result<Product, ClientError> {
        req.validate().map_err(ClientError::validation)?;
        let product = self.api.create_product(&req).await?;
        self.products.push(product.clone());
        Ok(product)
    }

    pub async fn set_product_quantity(&mut self, id: &str, quantity: i64) -> Result<Product, ClientError> {
        let product = self.api.update_product_quantity(id, quantity).await?;
        replace_by_id(&mut self.products, product.clone(), |p| &p.id);
        Ok(product)
    }

    pub async fn delete_product(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_product(id).await?;
        self.products.retain(|p| p.id != id);
        Ok(())
    }

    // ---- conrods ----

    pub async fn add_conrod(&mut self, req: CreateConrodRequest) -> Result<Conrod, ClientError> {
        req.validate().map_err(ClientError::validation)?;
        let conrod = self.api.create_conrod(&req).await?;
        self.conrods.push(conrod.clone());
        Ok(conrod)
    }

    pub async fn delete_conrod(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_conrod(id).await?;
        self.conrods.retain(|c| c.id != id);
        Ok(())
    }

    // ---- production ----

    /// Records a run; the server also moves raw-material and conrod stock,
    /// so the product list is reloaded.
    pub async fn record_production(
        &mut self,
        req: CreateProductionRequest,
    ) -> Result<ProductionRecord, ClientError> {
        req.validate().map_err(ClientError::validation)?;
        let record = self.api.create_production(&req).await?;
        self.production.push(record.clone());
        self.products = self.api.list_products().await?;
        Ok(record)
    }

    pub async fn set_production_quantity(
        &mut self,
        id: &str,
        quantity: i64,
    ) -> Result<ProductionRecord, ClientError> {
        let record = self.api.update_production_quantity(id, quantity).await?;
        replace_by_id(&mut self.production, record.clone(), |r| &r.id);
        Ok(record)
    }

    pub async fn delete_production(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_production(id).await?;
        self.production.retain(|r| r.id != id);
        Ok(())
    }

    // ---- bills ----

    pub async fn create_bill(&mut self, req: CreateBillRequest) -> Result<Bill, ClientError> {
        req.validate().map_err(ClientError::validation)?;
        let bill = self.api.create_bill(&req).await?;
        self.bills.push(bill.clone());
        self.production = self.api.list_production().await?;
        Ok(bill)
    }

    pub async fn delete_bill(&mut self, id: &str) -> Result<DeleteBillResponse, ClientError> {
        let response = self.api.delete_bill(id).await?;
        self.bills.retain(|b| b.id != response.deleted_bill_id);
        if let Some(record) = &response.updated_production_record {
            replace_by_id(&mut self.production, record.clone(), |r| &r.id);
        }
        Ok(response)
    }

    // ---- derived ----

    pub fn billing_history(&self) -> Vec<BillingHistoryRow> {
        views::billing_history(&self.bills, &self.production, &self.conrods)
    }

    pub fn billing_totals(&self) -> BillingTotals {
        views::billing_totals(&self.bills)
    }

    pub fn stock_by_type(&self) -> BTreeMap<ProductType, i64> {
        views::stock_by_type(&self.products)
    }
}

fn replace_by_id<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &String) {
    match items.iter().position(|existing| id(existing) == id(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
