use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::conrod::ConrodDimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum ProductType {
    #[serde(rename = "Ball Bearings")]
    #[sqlx(rename = "Ball Bearings")]
    BallBearings,
    Pins,
    Conrod,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::BallBearings => "Ball Bearings",
            ProductType::Pins => "Pins",
            ProductType::Conrod => "Conrod",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallBearingDimensions {
    pub diameter: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDimensions {
    pub height: f64,
    pub diameter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter2: Option<f64>,
}

/// Product type together with the dimensions that belong to it.
///
/// On the wire this is two sibling fields: `productType` is the tag and
/// `dimensions` holds the variant's measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "productType", content = "dimensions")]
pub enum ProductSpec {
    #[serde(rename = "Ball Bearings")]
    BallBearings(BallBearingDimensions),
    Pins(PinDimensions),
    Conrod(ConrodDimensions),
}

impl ProductSpec {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductSpec::BallBearings(_) => ProductType::BallBearings,
            ProductSpec::Pins(_) => ProductType::Pins,
            ProductSpec::Conrod(_) => ProductType::Conrod,
        }
    }

    /// Dimensions as the JSON text stored in the `dimensions` column.
    pub fn dimensions_json(&self) -> Result<String, serde_json::Error> {
        match self {
            ProductSpec::BallBearings(d) => serde_json::to_string(d),
            ProductSpec::Pins(d) => serde_json::to_string(d),
            ProductSpec::Conrod(d) => serde_json::to_string(d),
        }
    }

    pub fn from_parts(product_type: ProductType, dimensions: &str) -> Result<Self, serde_json::Error> {
        Ok(match product_type {
            ProductType::BallBearings => ProductSpec::BallBearings(serde_json::from_str(dimensions)?),
            ProductType::Pins => ProductSpec::Pins(serde_json::from_str(dimensions)?),
            ProductType::Conrod => ProductSpec::Conrod(serde_json::from_str(dimensions)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub product_name: String,
    #[serde(flatten)]
    pub spec: ProductSpec,
    pub quantity: i64,
    pub date: NaiveDate,
}

impl Product {
    pub fn product_type(&self) -> ProductType {
        self.spec.product_type()
    }
}

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub dimensions: String,
    pub quantity: i64,
    pub date: NaiveDate,
}

impl TryFrom<ProductRow> for Product {
    type Error = serde_json::Error;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            spec: ProductSpec::from_parts(row.product_type, &row.dimensions)?,
            id: row.id,
            product_name: row.product_name,
            quantity: row.quantity,
            date: row.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_type_and_dimensions_side_by_side() {
        let product = Product {
            id: "p1".into(),
            product_name: "PinA".into(),
            spec: ProductSpec::Pins(PinDimensions { height: 12.5, diameter: 4.0, diameter2: None }),
            quantity: 100,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "p1",
                "productName": "PinA",
                "productType": "Pins",
                "dimensions": { "height": 12.5, "diameter": 4.0 },
                "quantity": 100,
                "date": "2024-03-01"
            })
        );
    }

    #[test]
    fn ball_bearing_wire_name_has_a_space() {
        let product: Product = serde_json::from_value(json!({
            "id": "b1",
            "productName": "BBA",
            "productType": "Ball Bearings",
            "dimensions": { "diameter": 6.35 },
            "quantity": 50,
            "date": "2024-03-01"
        }))
        .unwrap();

        assert_eq!(product.product_type(), ProductType::BallBearings);
        assert_eq!(product.spec, ProductSpec::BallBearings(BallBearingDimensions { diameter: 6.35 }));
    }

    #[test]
    fn dimensions_must_fit_the_type() {
        let result = serde_json::from_value::<ProductSpec>(json!({
            "productType": "Conrod",
            "dimensions": { "diameter": 6.35 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn stored_parts_rebuild_the_variant() {
        let spec = ProductSpec::Conrod(ConrodDimensions {
            small_end_diameter: 10.0,
            big_end_diameter: 20.0,
            center_distance: 55.5,
        });
        let stored = spec.dimensions_json().unwrap();
        assert_eq!(stored, r#"{"smallEndDiameter":10.0,"bigEndDiameter":20.0,"centerDistance":55.5}"#);
        assert_eq!(ProductSpec::from_parts(ProductType::Conrod, &stored).unwrap(), spec);
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        assert!(serde_json::from_str::<ProductType>(r#""Bolts""#).is_err());
    }
}
