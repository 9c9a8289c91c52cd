//! Sales over time: monthly trend and month-over-month growth by region

use std::collections::BTreeMap;

use serde::Serialize;

use super::numeric::{money, percent_change};
use super::window::WindowExt;
use crate::report::MetricRow;
use crate::schema::{Dataset, Period};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySales {
    pub period: String,
    pub year: i32,
    pub month: u32,
    pub total_sales: f64,
}

impl MetricRow for MonthlySales {
    const COLUMNS: &'static [&'static str] = &["period", "year", "month", "total_sales"];
}

/// Total sales per month of `year`, oldest month first.
pub fn monthly_sales_trend(dataset: &Dataset, year: i32) -> Vec<MonthlySales> {
    let mut totals: BTreeMap<Period, f64> = BTreeMap::new();
    for order in dataset.orders.iter().filter(|o| o.in_year(year)) {
        *totals.entry(order.period()).or_insert(0.0) += order.sales;
    }

    totals
        .into_iter()
        .map(|(period, total)| MonthlySales {
            period: period.to_string(),
            year: period.year,
            month: period.month,
            total_sales: money(total),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalGrowth {
    pub region: String,
    pub period: String,
    pub total_sales: f64,
    /// Prior period's sales in the same region; null for a region's first period
    pub previous_sales: Option<f64>,
    /// Null when there is no prior period or its sales were zero
    pub growth_pct: Option<f64>,
}

impl MetricRow for RegionalGrowth {
    const COLUMNS: &'static [&'static str] = &[
        "region",
        "period",
        "total_sales",
        "previous_sales",
        "growth_pct",
    ];
}

/// Month-over-month sales growth within each region.
///
/// Rows are ordered by region, then period. The prior period is the
/// previous month that has sales in that region, not necessarily the
/// previous calendar month.
pub fn regional_growth(dataset: &Dataset) -> Vec<RegionalGrowth> {
    let index = dataset.index();

    let mut by_region: BTreeMap<&str, BTreeMap<Period, f64>> = BTreeMap::new();
    for joined in index.joined_orders() {
        let Some(location) = joined.location else {
            continue;
        };
        *by_region
            .entry(location.region.as_str())
            .or_default()
            .entry(joined.order.period())
            .or_insert(0.0) += joined.order.sales;
    }

    let mut rows = Vec::new();
    for (region, periods) in by_region {
        for (previous, (period, total)) in periods.iter().with_previous() {
            let previous_sales = previous.map(|(_, sales)| *sales);
            rows.push(RegionalGrowth {
                region: region.to_string(),
                period: period.to_string(),
                total_sales: money(*total),
                previous_sales: previous_sales.map(money),
                growth_pct: percent_change(previous_sales, *total),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::fixtures::{dataset, order, WEST};
    use crate::schema::{Order, PostalCode};

    fn sale(row_id: i64, date: &str, sales: f64) -> Order {
        Order {
            sales,
            ..order(row_id, date)
        }
    }

    #[test]
    fn test_monthly_trend_groups_and_filters_year() {
        let ds = dataset(vec![
            sale(1, "2020-03-02", 100.0),
            sale(2, "2020-01-15", 40.0),
            sale(3, "2020-03-28", 25.5),
            sale(4, "2021-01-01", 999.0),
            sale(5, "2019-12-31", 999.0),
        ]);

        let rows = monthly_sales_trend(&ds, 2020);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2020-01");
        assert_eq!(rows[0].total_sales, 40.0);
        assert_eq!(rows[1].period, "2020-03");
        assert_eq!(rows[1].month, 3);
        assert_eq!(rows[1].total_sales, 125.5);
    }

    #[test]
    fn test_monthly_totals_sum_to_year_total() {
        let orders: Vec<Order> = (1..=36)
            .map(|i| {
                let month = (i % 12) + 1;
                sale(i, &format!("2020-{:02}-{:02}", month, (i % 27) + 1), i as f64 * 3.25)
            })
            .collect();
        let year_total: f64 = orders.iter().map(|o| o.sales).sum();
        let ds = dataset(orders);

        let rows = monthly_sales_trend(&ds, 2020);
        let monthly_total: f64 = rows.iter().map(|r| r.total_sales).sum();
        assert_eq!(rows.len(), 12);
        assert!((monthly_total - year_total).abs() < 0.01);
    }

    #[test]
    fn test_regional_growth_first_period_is_null() {
        let ds = dataset(vec![
            sale(1, "2021-01-10", 200.0),
            sale(2, "2021-02-10", 250.0),
            sale(3, "2021-04-10", 125.0),
            Order {
                postal_code: PostalCode(WEST),
                ..sale(4, "2021-02-01", 80.0)
            },
        ]);

        let rows = regional_growth(&ds);
        assert_eq!(rows.len(), 4);

        let east: Vec<_> = rows.iter().filter(|r| r.region == "East").collect();
        assert_eq!(east[0].period, "2021-01");
        assert_eq!(east[0].previous_sales, None);
        assert_eq!(east[0].growth_pct, None);
        assert_eq!(east[1].growth_pct, Some(25.0));
        // Gap month: compared with the previous period that has sales
        assert_eq!(east[2].period, "2021-04");
        assert_eq!(east[2].previous_sales, Some(250.0));
        assert_eq!(east[2].growth_pct, Some(-50.0));

        let west: Vec<_> = rows.iter().filter(|r| r.region == "West").collect();
        assert_eq!(west.len(), 1);
        assert_eq!(west[0].growth_pct, None);
    }

    #[test]
    fn test_regional_growth_zero_prior_is_null() {
        let ds = dataset(vec![sale(1, "2021-01-10", 0.0), sale(2, "2021-02-10", 50.0)]);

        let rows = regional_growth(&ds);
        assert_eq!(rows[1].previous_sales, Some(0.0));
        assert_eq!(rows[1].growth_pct, None);
    }

    #[test]
    fn test_regional_growth_cancelled_prior_is_null() {
        let ds = dataset(vec![
            sale(1, "2021-01-03", 0.1),
            sale(2, "2021-01-09", 0.2),
            sale(3, "2021-01-20", -0.3),
            sale(4, "2021-02-10", 50.0),
        ]);

        let rows = regional_growth(&ds);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].previous_sales, Some(0.0));
        assert_eq!(rows[1].growth_pct, None);
    }

    #[test]
    fn test_regional_growth_skips_unknown_locations() {
        let ds = dataset(vec![Order {
            postal_code: PostalCode(1),
            ..sale(1, "2021-01-10", 10.0)
        }]);
        assert!(regional_growth(&ds).is_empty());
    }
}
