//! Metric catalogue and execution
//!
//! `ReportRunner` validates the configuration once, applies the optional
//! integrity gate, and then runs calculators one at a time or all at once
//! on rayon's pool. Calculators share nothing but the read-only dataset.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use super::config::ReportConfig;
use super::customers::{rolling_customer_sales, top_customers};
use super::errors::{MetricsError, MetricsResult};
use super::products::product_sales_vs_average;
use super::profitability::{category_profitability, top_products_by_region};
use super::shipping::{discount_margin, shipping_time_by_mode};
use super::trend::{monthly_sales_trend, regional_growth};
use crate::integrity::IntegrityChecker;
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::report::ResultTable;
use crate::schema::Dataset;

/// Every calculator, in catalogue order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    MonthlySalesTrend,
    RegionalGrowth,
    CategoryProfitability,
    TopProductsByRegion,
    TopCustomers,
    RollingCustomerSales,
    ProductSalesVsAverage,
    ShippingTimeByMode,
    DiscountMargin,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::MonthlySalesTrend,
        Metric::RegionalGrowth,
        Metric::CategoryProfitability,
        Metric::TopProductsByRegion,
        Metric::TopCustomers,
        Metric::RollingCustomerSales,
        Metric::ProductSalesVsAverage,
        Metric::ShippingTimeByMode,
        Metric::DiscountMargin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::MonthlySalesTrend => "monthly_sales_trend",
            Metric::RegionalGrowth => "regional_growth",
            Metric::CategoryProfitability => "category_profitability",
            Metric::TopProductsByRegion => "top_products_by_region",
            Metric::TopCustomers => "top_customers",
            Metric::RollingCustomerSales => "rolling_customer_sales",
            Metric::ProductSalesVsAverage => "product_sales_vs_average",
            Metric::ShippingTimeByMode => "shipping_time_by_mode",
            Metric::DiscountMargin => "discount_margin",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = MetricsError;

    /// Accepts catalogue names with either `_` or `-` separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| MetricsError::UnknownMetric(s.to_string()))
    }
}

/// Runs calculators against one dataset with one configuration
#[derive(Debug)]
pub struct ReportRunner<'a> {
    dataset: &'a Dataset,
    config: &'a ReportConfig,
}

impl<'a> ReportRunner<'a> {
    /// Validates `config` and, when `require_clean` is set, checks that no
    /// order is orphaned.
    pub fn new(dataset: &'a Dataset, config: &'a ReportConfig) -> MetricsResult<Self> {
        config.validate()?;

        if config.require_clean {
            let report = IntegrityChecker::check(dataset);
            if !report.is_clean() {
                return Err(MetricsError::IntegrityGate {
                    orphans: report.orphan_count(),
                });
            }
        }

        Ok(Self { dataset, config })
    }

    pub fn config(&self) -> &ReportConfig {
        self.config
    }

    /// Computes one metric.
    pub fn run(&self, metric: Metric) -> MetricsResult<ResultTable> {
        let scope = ObservationScope::with_fields("METRIC", &[("metric", metric.name())]);

        match self.compute(metric) {
            Ok(table) => {
                scope.complete_with_fields(&[("rows", &table.len().to_string())]);
                Ok(table)
            }
            Err(e) => {
                scope.fail(&e.to_string());
                Err(e)
            }
        }
    }

    /// Computes every metric in parallel; tables come back in catalogue
    /// order.
    pub fn run_all(&self) -> MetricsResult<Vec<ResultTable>> {
        let tables: Vec<ResultTable> = Metric::ALL
            .par_iter()
            .map(|metric| self.run(*metric))
            .collect::<MetricsResult<_>>()?;

        log_event_with_fields(
            Event::ReportAllComplete,
            &[("metrics", &tables.len().to_string())],
        );
        Ok(tables)
    }

    fn compute(&self, metric: Metric) -> MetricsResult<ResultTable> {
        let ds = self.dataset;
        let cfg = self.config;
        let name = metric.name();

        let table = match metric {
            Metric::MonthlySalesTrend => {
                ResultTable::from_rows(name, &monthly_sales_trend(ds, cfg.monthly_trend_year))?
            }
            Metric::RegionalGrowth => ResultTable::from_rows(name, &regional_growth(ds))?,
            Metric::CategoryProfitability => {
                ResultTable::from_rows(name, &category_profitability(ds, cfg.profitability_year))?
            }
            Metric::TopProductsByRegion => ResultTable::from_rows(
                name,
                &top_products_by_region(ds, cfg.top_products_per_region),
            )?,
            Metric::TopCustomers => {
                ResultTable::from_rows(name, &top_customers(ds, cfg.top_customers_limit))?
            }
            Metric::RollingCustomerSales => ResultTable::from_rows(
                name,
                &rolling_customer_sales(ds, cfg.rolling_sales_year, cfg.rolling_window_months),
            )?,
            Metric::ProductSalesVsAverage => ResultTable::from_rows(
                name,
                &product_sales_vs_average(ds, cfg.product_average_year),
            )?,
            Metric::ShippingTimeByMode => {
                ResultTable::from_rows(name, &shipping_time_by_mode(ds))?
            }
            Metric::DiscountMargin => {
                ResultTable::from_rows(name, &discount_margin(ds, &cfg.discount_bands))?
            }
        };

        Ok(table)
    }
}
