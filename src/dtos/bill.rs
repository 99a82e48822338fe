// src/dtos/bill.rs
use serde::{Deserialize, Serialize};

use crate::models::production::ProductionRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub invoice_no: String,
    pub product_id: String,
    pub quantity: i64,
    pub amount: f64,
}

impl CreateBillRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        super::require(&self.invoice_no, "invoiceNo is required")?;
        super::require(&self.product_id, "productId is required")?;
        super::positive(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBillResponse {
    pub deleted_bill_id: String,
    /// `None` when the production record was removed before the bill.
    pub updated_production_record: Option<ProductionRecord>,
}
