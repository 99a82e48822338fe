use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An invoice line. `product_id` holds the id of the production record it draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub invoice_no: String,
    pub product_id: String,
    pub quantity: i64,
    pub amount: f64,
}
