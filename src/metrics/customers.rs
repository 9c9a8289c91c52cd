//! Customer rankings and rolling customer sales

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use super::numeric::money;
use super::window::TrailingWindowSums;
use crate::report::MetricRow;
use crate::schema::Dataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSales {
    pub customer_id: String,
    pub customer_name: String,
    pub total_sales: f64,
}

impl MetricRow for CustomerSales {
    const COLUMNS: &'static [&'static str] = &["customer_id", "customer_name", "total_sales"];
}

/// Customers by lifetime sales, highest first, at most `limit` rows.
pub fn top_customers(dataset: &Dataset, limit: usize) -> Vec<CustomerSales> {
    let index = dataset.index();

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for order in &dataset.orders {
        if index.customer(&order.customer_id).is_some() {
            *totals.entry(order.customer_id.as_str()).or_insert(0.0) += order.sales;
        }
    }

    let mut rows: Vec<CustomerSales> = totals
        .into_iter()
        .filter_map(|(id, sales)| {
            let customer = index.customer(id)?;
            Some(CustomerSales {
                customer_id: customer.customer_id.clone(),
                customer_name: customer.customer_name.clone(),
                total_sales: money(sales),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_sales
            .total_cmp(&a.total_sales)
            .then_with(|| a.customer_id.cmp(&b.customer_id))
    });
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingCustomerSales {
    pub customer_id: String,
    pub customer_name: String,
    pub order_date: NaiveDate,
    /// Sales on this date
    pub daily_sales: f64,
    /// Sales over the trailing window ending on this date
    pub rolling_sales: f64,
}

impl MetricRow for RollingCustomerSales {
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "customer_name",
        "order_date",
        "daily_sales",
        "rolling_sales",
    ];
}

/// Trailing `window_months` sales per customer for every date in `year`
/// on which the customer ordered, highest rolling value first.
///
/// Only orders from `year` feed the window.
pub fn rolling_customer_sales(
    dataset: &Dataset,
    year: i32,
    window_months: u32,
) -> Vec<RollingCustomerSales> {
    let index = dataset.index();

    // customer -> date -> sales on that date
    let mut daily: BTreeMap<&str, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
    for order in dataset.orders.iter().filter(|o| o.in_year(year)) {
        if index.customer(&order.customer_id).is_none() {
            continue;
        }
        *daily
            .entry(order.customer_id.as_str())
            .or_default()
            .entry(order.order_date)
            .or_insert(0.0) += order.sales;
    }

    // (date, customer) -> (daily, rolling); the max guards against a date
    // appearing twice in a partition
    let mut best: BTreeMap<(NaiveDate, &str), (f64, f64)> = BTreeMap::new();
    for (customer_id, dates) in &daily {
        let points: Vec<(NaiveDate, f64)> = dates.iter().map(|(d, s)| (*d, *s)).collect();
        for (date, sales, rolling) in TrailingWindowSums::new(&points, window_months) {
            let entry = best.entry((date, *customer_id)).or_insert((sales, rolling));
            if rolling > entry.1 {
                *entry = (sales, rolling);
            }
        }
    }

    let mut rows: Vec<RollingCustomerSales> = best
        .into_iter()
        .filter_map(|((date, customer_id), (sales, rolling))| {
            let customer = index.customer(customer_id)?;
            Some(RollingCustomerSales {
                customer_id: customer.customer_id.clone(),
                customer_name: customer.customer_name.clone(),
                order_date: date,
                daily_sales: money(sales),
                rolling_sales: money(rolling),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.rolling_sales
            .total_cmp(&a.rolling_sales)
            .then_with(|| a.order_date.cmp(&b.order_date))
            .then_with(|| a.customer_id.cmp(&b.customer_id))
    });
    rows
}
