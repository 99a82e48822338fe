// src/dtos/production.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductionRequest {
    pub conrod_id: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl CreateProductionRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        super::require(&self.conrod_id, "conrodId is required")?;
        super::positive(self.quantity)
    }
}
