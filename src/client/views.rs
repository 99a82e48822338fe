//! Derived read models computed from cached records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{bill::Bill, conrod::Conrod, product::{Product, ProductType}, production::ProductionRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingHistoryRow {
    pub invoice_no: String,
    /// Conrod name when the production record and recipe still exist,
    /// otherwise the raw production id from the bill.
    pub product: String,
    pub quantity: i64,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BillingTotals {
    pub quantity: i64,
    pub amount: f64,
}

pub fn billing_history(
    bills: &[Bill],
    production: &[ProductionRecord],
    conrods: &[Conrod],
) -> Vec<BillingHistoryRow> {
    bills
        .iter()
        .map(|bill| {
            let product = production
                .iter()
                .find(|r| r.id == bill.product_id)
                .and_then(|r| conrods.iter().find(|c| c.id == r.conrod_id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| bill.product_id.clone());

            BillingHistoryRow {
                invoice_no: bill.invoice_no.clone(),
                product,
                quantity: bill.quantity,
                amount: bill.amount,
            }
        })
        .collect()
}

pub fn billing_totals(bills: &[Bill]) -> BillingTotals {
    bills.iter().fold(BillingTotals::default(), |acc, b| BillingTotals {
        quantity: acc.quantity + b.quantity,
        amount: acc.amount + b.amount,
    })
}

/// Summed quantity per product type; types with no products are absent.
pub fn stock_by_type(products: &[Product]) -> BTreeMap<ProductType, i64> {
    let mut totals = BTreeMap::new();
    for product in products {
        *totals.entry(product.product_type()).or_insert(0) += product.quantity;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conrod::ConrodDimensions;
    use crate::models::product::{BallBearingDimensions, PinDimensions, ProductSpec};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn bill(id: &str, production_id: &str, quantity: i64, amount: f64) -> Bill {
        Bill {
            id: id.into(),
            invoice_no: format!("INV-{id}"),
            product_id: production_id.into(),
            quantity,
            amount,
        }
    }

    fn conrod(id: &str, name: &str) -> Conrod {
        Conrod {
            id: id.into(),
            sr_no: 1,
            name: name.into(),
            dimensions: ConrodDimensions { small_end_diameter: 1.0, big_end_diameter: 2.0, center_distance: 3.0 },
            pin: "PinA".into(),
            ball_bearing: "BBA".into(),
        }
    }

    #[test]
    fn history_resolves_conrod_name_or_falls_back() {
        let production = vec![ProductionRecord { id: "r1".into(), conrod_id: "c1".into(), quantity: 5, date: day() }];
        let conrods = vec![conrod("c1", "C1")];
        let bills = vec![bill("1", "r1", 2, 40.0), bill("2", "gone", 1, 20.0)];

        let rows = billing_history(&bills, &production, &conrods);

        assert_eq!(rows[0].product, "C1");
        assert_eq!(rows[0].invoice_no, "INV-1");
        assert_eq!(rows[1].product, "gone");
    }

    #[test]
    fn history_falls_back_when_recipe_deleted() {
        let production = vec![ProductionRecord { id: "r1".into(), conrod_id: "c9".into(), quantity: 5, date: day() }];
        let rows = billing_history(&[bill("1", "r1", 2, 40.0)], &production, &[]);
        assert_eq!(rows[0].product, "r1");
    }

    #[test]
    fn totals_sum_quantity_and_amount() {
        let totals = billing_totals(&[bill("1", "r1", 2, 40.5), bill("2", "r1", 3, 9.5)]);
        assert_eq!(totals, BillingTotals { quantity: 5, amount: 50.0 });
        assert_eq!(billing_totals(&[]), BillingTotals::default());
    }

    #[test]
    fn stock_groups_by_type() {
        let product = |name: &str, spec: ProductSpec, quantity: i64| Product {
            id: name.into(),
            product_name: name.into(),
            spec,
            quantity,
            date: day(),
        };
        let pins = ProductSpec::Pins(PinDimensions { height: 1.0, diameter: 1.0, diameter2: None });
        let bb = ProductSpec::BallBearings(BallBearingDimensions { diameter: 2.0 });

        let stock = stock_by_type(&[
            product("PinA", pins, 90),
            product("PinB", pins, -5),
            product("BBA", bb, 40),
        ]);

        assert_eq!(stock.get(&ProductType::Pins), Some(&85));
        assert_eq!(stock.get(&ProductType::BallBearings), Some(&40));
        assert_eq!(stock.get(&ProductType::Conrod), None);
    }
}
