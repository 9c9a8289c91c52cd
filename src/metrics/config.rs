//! Report configuration
//!
//! One structure carries every tunable a calculator reads: target years,
//! ranking sizes, the rolling window length and discount thresholds.
//! Every field is optional in the JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::bands::DiscountBands;
use super::errors::{MetricsError, MetricsResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Year for the monthly sales trend
    #[serde(default = "default_monthly_trend_year")]
    pub monthly_trend_year: i32,

    /// Year for category profitability
    #[serde(default = "default_profitability_year")]
    pub profitability_year: i32,

    /// Year for rolling customer sales
    #[serde(default = "default_rolling_sales_year")]
    pub rolling_sales_year: i32,

    /// Year for product sales vs. average
    #[serde(default = "default_product_average_year")]
    pub product_average_year: i32,

    /// Ranks kept per region in top products
    #[serde(default = "default_top_products_per_region")]
    pub top_products_per_region: usize,

    /// Rows kept in top customers
    #[serde(default = "default_top_customers_limit")]
    pub top_customers_limit: usize,

    /// Length of the rolling sales window
    #[serde(default = "default_rolling_window_months")]
    pub rolling_window_months: u32,

    #[serde(default)]
    pub discount_bands: DiscountBands,

    /// Refuse to compute metrics on a dataset with orphaned orders
    #[serde(default)]
    pub require_clean: bool,
}

fn default_monthly_trend_year() -> i32 {
    2020
}
fn default_profitability_year() -> i32 {
    2021
}
fn default_rolling_sales_year() -> i32 {
    2023
}
fn default_product_average_year() -> i32 {
    2023
}
fn default_top_products_per_region() -> usize {
    5
}
fn default_top_customers_limit() -> usize {
    100
}
fn default_rolling_window_months() -> u32 {
    12
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            monthly_trend_year: default_monthly_trend_year(),
            profitability_year: default_profitability_year(),
            rolling_sales_year: default_rolling_sales_year(),
            product_average_year: default_product_average_year(),
            top_products_per_region: default_top_products_per_region(),
            top_customers_limit: default_top_customers_limit(),
            rolling_window_months: default_rolling_window_months(),
            discount_bands: DiscountBands::default(),
            require_clean: false,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON file and validate it
    pub fn load(path: &Path) -> MetricsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| MetricsError::ConfigUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: ReportConfig =
            serde_json::from_str(&content).map_err(|e| MetricsError::ConfigUnreadable {
                path: path.display().to_string(),
                reason: format!("Invalid config JSON: {}", e),
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MetricsResult<()> {
        if self.top_products_per_region == 0 {
            return Err(MetricsError::InvalidConfig(
                "top_products_per_region must be > 0".into(),
            ));
        }
        if self.top_customers_limit == 0 {
            return Err(MetricsError::InvalidConfig(
                "top_customers_limit must be > 0".into(),
            ));
        }
        if self.rolling_window_months == 0 {
            return Err(MetricsError::InvalidConfig(
                "rolling_window_months must be > 0".into(),
            ));
        }
        self.discount_bands
            .validate()
            .map_err(MetricsError::InvalidConfig)
    }

    /// Points every year-filtered calculator at `year`
    pub fn with_year(mut self, year: i32) -> Self {
        self.monthly_trend_year = year;
        self.profitability_year = year;
        self.rolling_sales_year = year;
        self.product_average_year = year;
        self
    }

    pub fn with_top_products(mut self, n: usize) -> Self {
        self.top_products_per_region = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.monthly_trend_year, 2020);
        assert_eq!(config.profitability_year, 2021);
        assert_eq!(config.rolling_sales_year, 2023);
        assert_eq!(config.top_products_per_region, 5);
        assert_eq!(config.top_customers_limit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        fs::write(
            &path,
            r#"{"profitability_year": 2019, "discount_bands": {"low_max": 0.2}}"#,
        )
        .unwrap();

        let config = ReportConfig::load(&path).unwrap();
        assert_eq!(config.profitability_year, 2019);
        assert_eq!(config.monthly_trend_year, 2020);
        assert_eq!(config.discount_bands.low_max, 0.2);
        assert_eq!(config.discount_bands.medium_max, 0.3);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        fs::write(&path, r#"{"top_n": 3}"#).unwrap();

        let err = ReportConfig::load(&path).unwrap_err();
        assert!(matches!(err, MetricsError::ConfigUnreadable { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ReportConfig::default().with_top_products(0);
        assert!(matches!(
            config.validate(),
            Err(MetricsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_with_year_overrides_all() {
        let config = ReportConfig::default().with_year(2022);
        assert_eq!(config.monthly_trend_year, 2022);
        assert_eq!(config.profitability_year, 2022);
        assert_eq!(config.rolling_sales_year, 2022);
        assert_eq!(config.product_average_year, 2022);
    }
}
