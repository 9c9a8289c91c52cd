//! Product sales compared with the cross-product average

use std::collections::HashMap;

use serde::Serialize;

use super::numeric::{mean, money, percentage};
use crate::report::MetricRow;
use crate::schema::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductVsAverage {
    pub product_id: String,
    pub product_name: String,
    pub total_sales: f64,
    pub average_sales: f64,
    /// Null when the average is zero
    pub deviation_pct: Option<f64>,
    pub classification: Classification,
}

impl MetricRow for ProductVsAverage {
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "total_sales",
        "average_sales",
        "deviation_pct",
        "classification",
    ];
}

/// Each product's `year` sales against the mean of all product totals
/// for that year, largest positive deviation first.
///
/// A product equal to the average is classified below it.
pub fn product_sales_vs_average(dataset: &Dataset, year: i32) -> Vec<ProductVsAverage> {
    let index = dataset.index();

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for order in dataset.orders.iter().filter(|o| o.in_year(year)) {
        if index.product(&order.product_id).is_some() {
            *totals.entry(order.product_id.as_str()).or_insert(0.0) += order.sales;
        }
    }

    let Some(average) = mean(totals.values().copied()) else {
        return Vec::new();
    };

    let mut rows: Vec<ProductVsAverage> = totals
        .into_iter()
        .filter_map(|(id, total)| {
            let product = index.product(id)?;
            Some(ProductVsAverage {
                product_id: product.product_id.clone(),
                product_name: product.product_name.clone(),
                total_sales: money(total),
                average_sales: money(average),
                deviation_pct: percentage(total - average, average),
                classification: if total > average {
                    Classification::AboveAverage
                } else {
                    Classification::BelowAverage
                },
            })
        })
        .collect();

    // Undefined deviations sort last
    rows.sort_by(|a, b| {
        let a_dev = a.deviation_pct.unwrap_or(f64::NEG_INFINITY);
        let b_dev = b.deviation_pct.unwrap_or(f64::NEG_INFINITY);
        b_dev
            .total_cmp(&a_dev)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    rows
}
