//! Profit breakdowns: by category and top products per region

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::numeric::money;
use super::window::dense_rank_by;
use crate::report::MetricRow;
use crate::schema::Dataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProfit {
    pub category: String,
    pub sub_category: String,
    pub total_profit: f64,
}

impl MetricRow for CategoryProfit {
    const COLUMNS: &'static [&'static str] = &["category", "sub_category", "total_profit"];
}

/// Total profit per (category, sub-category) for `year`, most profitable
/// first. Orders without a known product are skipped.
pub fn category_profitability(dataset: &Dataset, year: i32) -> Vec<CategoryProfit> {
    let index = dataset.index();

    let mut totals: HashMap<(&str, &str), f64> = HashMap::new();
    for order in dataset.orders.iter().filter(|o| o.in_year(year)) {
        let Some(product) = index.product(&order.product_id) else {
            continue;
        };
        *totals
            .entry((product.category.as_str(), product.sub_category.as_str()))
            .or_insert(0.0) += order.profit;
    }

    let mut rows: Vec<CategoryProfit> = totals
        .into_iter()
        .map(|((category, sub_category), profit)| CategoryProfit {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            total_profit: money(profit),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_profit
            .total_cmp(&a.total_profit)
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.sub_category.cmp(&b.sub_category))
    });
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalProductRank {
    pub region: String,
    pub product_id: String,
    pub product_name: String,
    pub total_profit: f64,
    pub profit_rank: usize,
}

impl MetricRow for RegionalProductRank {
    const COLUMNS: &'static [&'static str] = &[
        "region",
        "product_id",
        "product_name",
        "total_profit",
        "profit_rank",
    ];
}

/// Products ranked by total profit within each region, keeping dense
/// ranks `1..=top_n`.
///
/// Ranks compare profits rounded to cents, so totals that print the same
/// share a rank. Rows are ordered by region, rank, product name.
pub fn top_products_by_region(dataset: &Dataset, top_n: usize) -> Vec<RegionalProductRank> {
    let index = dataset.index();

    let mut by_region: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
    let mut names: HashMap<&str, &str> = HashMap::new();
    for joined in index.joined_orders() {
        let (Some(location), Some(product)) = (joined.location, joined.product) else {
            continue;
        };
        names.insert(product.product_id.as_str(), product.product_name.as_str());
        *by_region
            .entry(location.region.as_str())
            .or_default()
            .entry(product.product_id.as_str())
            .or_insert(0.0) += joined.order.profit;
    }

    let mut rows = Vec::new();
    for (region, products) in by_region {
        let mut ranked: Vec<(&str, &str, f64)> = products
            .into_iter()
            .map(|(id, profit)| (id, names.get(id).copied().unwrap_or_default(), money(profit)))
            .collect();
        ranked.sort_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| a.1.cmp(b.1))
                .then_with(|| a.0.cmp(b.0))
        });

        rows.extend(
            dense_rank_by(&ranked, |r| r.2)
                .take_while(|(rank, _)| *rank <= top_n)
                .map(|(rank, (id, name, profit))| RegionalProductRank {
                    region: region.to_string(),
                    product_id: id.to_string(),
                    product_name: name.to_string(),
                    total_profit: *profit,
                    profit_rank: rank,
                }),
        );
    }
    rows
}
