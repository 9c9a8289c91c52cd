//! Cleaning stage between loading and validation
//!
//! - Locations: drop rows whose postal code is not numeric, then coerce
//! - Products: drop header/placeholder rows
//!
//! Customers and orders pass through untouched. This is the only stage
//! that removes or rewrites rows.

use serde::Serialize;

use super::dataset::{Dataset, RawDataset};
use super::types::{Location, PostalCode, Product, RawLocation};

/// Values that mark a product row as a repeated header
const PRODUCT_HEADER_ALIASES: &[&str] = &[
    "product_id",
    "category",
    "sub_category",
    "product_name",
];

/// Rows kept and dropped per cleaned table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CleaningReport {
    pub locations_kept: usize,
    pub locations_dropped: usize,
    pub products_kept: usize,
    pub products_dropped: usize,
}

impl CleaningReport {
    pub fn rows_dropped(&self) -> usize {
        self.locations_dropped + self.products_dropped
    }
}

pub struct Cleaner;

impl Cleaner {
    /// Cleans a raw dataset into a `Dataset`.
    pub fn clean(raw: RawDataset) -> (Dataset, CleaningReport) {
        let mut report = CleaningReport::default();

        let locations = Self::clean_locations(raw.locations, &mut report);
        let products = Self::clean_products(raw.products, &mut report);

        let dataset = Dataset::new(raw.customers, raw.orders, locations, products);
        (dataset, report)
    }

    fn clean_locations(rows: Vec<RawLocation>, report: &mut CleaningReport) -> Vec<Location> {
        let total = rows.len();
        let locations: Vec<Location> = rows
            .into_iter()
            .filter_map(|raw| {
                let postal_code = PostalCode::coerce(&raw.postal_code)?;
                Some(Location {
                    postal_code,
                    city: raw.city,
                    state: raw.state,
                    region: raw.region,
                    country_region: raw.country_region,
                })
            })
            .collect();

        report.locations_kept = locations.len();
        report.locations_dropped = total - locations.len();
        locations
    }

    fn clean_products(rows: Vec<Product>, report: &mut CleaningReport) -> Vec<Product> {
        let total = rows.len();
        let products: Vec<Product> = rows
            .into_iter()
            .filter(|p| !Self::is_placeholder(p))
            .collect();

        report.products_kept = products.len();
        report.products_dropped = total - products.len();
        products
    }

    /// A product row is a placeholder when any attribute holds a field name.
    pub fn is_placeholder(product: &Product) -> bool {
        product.attributes().iter().any(|(field, value)| {
            let normalized = normalize(value);
            normalized == *field || PRODUCT_HEADER_ALIASES.contains(&normalized.as_str())
        })
    }
}

/// Lowercases and maps spaces and hyphens to underscores: "Sub-Category"
/// becomes "sub_category".
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
