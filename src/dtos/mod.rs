pub mod product;
pub mod conrod;
pub mod production;
pub mod bill;

use serde::{Deserialize, Serialize};

/// Body of every `PATCH /{resource}/{id}`: the new absolute quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub id: String,
}

pub(crate) fn require(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

pub(crate) fn positive(quantity: i64) -> Result<(), &'static str> {
    if quantity > 0 {
        Ok(())
    } else {
        Err("Quantity must be greater than 0")
    }
}
