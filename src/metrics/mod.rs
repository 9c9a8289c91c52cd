//! Metric calculators
//!
//! Each calculator is a pure function from a cleaned `Dataset` (plus the
//! settings it reads from `ReportConfig`) to typed rows. Aggregation runs
//! in `f64`; rounding happens once, on output:
//!
//! - money: 2 decimal places
//! - percentages: 2 decimal places, `None` when the denominator is zero
//! - shipping durations: whole days
//!
//! `ReportRunner` turns rows into `ResultTable`s and can run the whole
//! catalogue in parallel.

mod bands;
mod config;
mod customers;
mod errors;
mod numeric;
mod products;
mod profitability;
mod runner;
mod shipping;
mod trend;
mod window;

#[cfg(test)]
mod fixtures;

pub use bands::{DiscountBand, DiscountBands};
pub use config::ReportConfig;
pub use customers::{rolling_customer_sales, top_customers, CustomerSales, RollingCustomerSales};
pub use errors::{MetricsError, MetricsResult};
pub use numeric::{mean, money, percent_change, percentage, round_to, whole};
pub use products::{product_sales_vs_average, Classification, ProductVsAverage};
pub use profitability::{
    category_profitability, top_products_by_region, CategoryProfit, RegionalProductRank,
};
pub use runner::{Metric, ReportRunner};
pub use shipping::{discount_margin, shipping_time_by_mode, DiscountMargin, ShippingTime};
pub use trend::{monthly_sales_trend, regional_growth, MonthlySales, RegionalGrowth};
pub use window::{dense_rank_by, TrailingWindowSums, WindowExt, WithPrevious};
