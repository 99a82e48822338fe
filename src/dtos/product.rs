// src/dtos/product.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::product::ProductSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: String,
    #[serde(flatten)]
    pub spec: ProductSpec,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        super::require(&self.product_name, "productName is required")
    }
}
