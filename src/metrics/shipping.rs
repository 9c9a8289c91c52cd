//! Shipping performance and discount impact on margin

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::bands::{DiscountBand, DiscountBands};
use super::numeric::{money, percentage, whole};
use crate::report::MetricRow;
use crate::schema::Dataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingTime {
    pub ship_mode: String,
    pub orders: usize,
    /// Mean days from order to shipment, rounded to whole days
    pub avg_shipping_days: f64,
}

impl MetricRow for ShippingTime {
    const COLUMNS: &'static [&'static str] = &["ship_mode", "orders", "avg_shipping_days"];
}

/// Average shipping duration per ship mode, fastest first.
pub fn shipping_time_by_mode(dataset: &Dataset) -> Vec<ShippingTime> {
    let mut by_mode: HashMap<&str, (i64, usize)> = HashMap::new();
    for order in &dataset.orders {
        let entry = by_mode.entry(order.ship_mode.as_str()).or_insert((0, 0));
        entry.0 += order.shipping_days();
        entry.1 += 1;
    }

    let mut rows: Vec<ShippingTime> = by_mode
        .into_iter()
        .map(|(mode, (days, count))| ShippingTime {
            ship_mode: mode.to_string(),
            orders: count,
            avg_shipping_days: whole(days as f64 / count as f64),
        })
        .collect();

    rows.sort_by(|a, b| {
        a.avg_shipping_days
            .total_cmp(&b.avg_shipping_days)
            .then_with(|| a.ship_mode.cmp(&b.ship_mode))
    });
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountMargin {
    pub ship_mode: String,
    pub discount_band: String,
    pub orders: usize,
    pub total_sales: f64,
    pub total_profit: f64,
    /// Profit as a percentage of sales; null when sales total zero
    pub margin_pct: Option<f64>,
}

impl MetricRow for DiscountMargin {
    const COLUMNS: &'static [&'static str] = &[
        "ship_mode",
        "discount_band",
        "orders",
        "total_sales",
        "total_profit",
        "margin_pct",
    ];
}

#[derive(Default)]
struct BandTotals {
    orders: usize,
    sales: f64,
    profit: f64,
}

/// Sales, profit and margin per (ship mode, discount band).
///
/// Rows are ordered by ship mode, then band from no discount to high.
pub fn discount_margin(dataset: &Dataset, bands: &DiscountBands) -> Vec<DiscountMargin> {
    let mut groups: BTreeMap<(&str, DiscountBand), BandTotals> = BTreeMap::new();
    for order in &dataset.orders {
        let band = bands.classify(order.discount);
        let totals = groups.entry((order.ship_mode.as_str(), band)).or_default();
        totals.orders += 1;
        totals.sales += order.sales;
        totals.profit += order.profit;
    }

    groups
        .into_iter()
        .map(|((mode, band), totals)| DiscountMargin {
            ship_mode: mode.to_string(),
            discount_band: bands.label(band),
            orders: totals.orders,
            total_sales: money(totals.sales),
            total_profit: money(totals.profit),
            margin_pct: percentage(totals.profit, totals.sales),
        })
        .collect()
}
