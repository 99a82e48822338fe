// src/dtos/conrod.rs
use serde::{Deserialize, Serialize};

use crate::models::conrod::ConrodDimensions;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConrodRequest {
    pub name: String,
    pub dimensions: ConrodDimensions,
    pub pin: String,
    pub ball_bearing: String,
}

impl CreateConrodRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        super::require(&self.name, "name is required")?;
        super::require(&self.pin, "pin is required")?;
        super::require(&self.ball_bearing, "ballBearing is required")
    }
}
