use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConrodDimensions {
    pub small_end_diameter: f64,
    pub big_end_diameter: f64,
    pub center_distance: f64,
}

/// A conrod recipe: one pin and one ball bearing, referenced by product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conrod {
    pub id: String,
    pub sr_no: i64,
    pub name: String,
    pub dimensions: ConrodDimensions,
    pub pin: String,
    pub ball_bearing: String,
}

#[derive(Debug, FromRow)]
pub struct ConrodRow {
    pub id: String,
    pub sr_no: i64,
    pub name: String,
    pub dimensions: String,
    pub pin: String,
    pub ball_bearing: String,
}

impl TryFrom<ConrodRow> for Conrod {
    type Error = serde_json::Error;

    fn try_from(row: ConrodRow) -> Result<Self, Self::Error> {
        Ok(Self {
            dimensions: serde_json::from_str(&row.dimensions)?,
            id: row.id,
            sr_no: row.sr_no,
            name: row.name,
            pin: row.pin,
            ball_bearing: row.ball_bearing,
        })
    }
}
