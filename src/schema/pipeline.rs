//! Load, clean and validate in one pass
//!
//! Each stage logs its outcome. A failure at any stage is returned
//! unchanged; nothing downstream sees a partially prepared dataset.

use std::path::Path;

use super::cleaner::{Cleaner, CleaningReport};
use super::dataset::Dataset;
use super::errors::SchemaResult;
use super::loader::DatasetLoader;
use super::validator::{DatasetValidator, ValidationSummary};
use crate::observability::{log_event_with_fields, Event, ObservationScope};

/// A dataset ready for calculators, with what cleaning and validation saw
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub dataset: Dataset,
    pub cleaning: CleaningReport,
    pub validation: ValidationSummary,
}

/// Reads the tables under `data_dir`, cleans them and validates keys.
pub fn prepare(data_dir: &Path) -> SchemaResult<PreparedDataset> {
    let loader = DatasetLoader::new(data_dir);
    let dir = loader.data_dir().display().to_string();
    let scope = ObservationScope::with_fields("DATASET_PREPARE", &[("data_dir", &dir)]);

    log_event_with_fields(Event::DatasetLoadBegin, &[("data_dir", &dir)]);
    let raw = match loader.load() {
        Ok(raw) => raw,
        Err(e) => {
            log_event_with_fields(
                Event::DatasetLoadFailed,
                &[("code", e.code().code()), ("reason", e.message())],
            );
            scope.fail(e.message());
            return Err(e);
        }
    };
    log_event_with_fields(
        Event::DatasetLoaded,
        &[
            ("customers", &raw.customers.len().to_string()),
            ("orders", &raw.orders.len().to_string()),
            ("locations", &raw.locations.len().to_string()),
            ("products", &raw.products.len().to_string()),
        ],
    );

    let (dataset, cleaning) = Cleaner::clean(raw);
    log_event_with_fields(
        Event::CleaningComplete,
        &[
            ("locations_dropped", &cleaning.locations_dropped.to_string()),
            ("products_dropped", &cleaning.products_dropped.to_string()),
        ],
    );

    let validation = match DatasetValidator::new(&dataset).validate() {
        Ok(summary) => summary,
        Err(e) => {
            log_event_with_fields(
                Event::ValidationRejected,
                &[("code", e.code().code()), ("reason", e.message())],
            );
            scope.fail(e.message());
            return Err(e);
        }
    };
    log_event_with_fields(
        Event::ValidationComplete,
        &[(
            "ship_before_order",
            &validation.ship_before_order.to_string(),
        )],
    );

    scope.complete();
    Ok(PreparedDataset {
        dataset,
        cleaning,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaErrorCode;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, table: &str, value: serde_json::Value) {
        fs::write(dir.join(format!("{}.json", table)), value.to_string()).unwrap();
    }

    fn seed(dir: &Path, customers: serde_json::Value) {
        write(dir, "customers", customers);
        write(
            dir,
            "orders",
            json!([{
                "row_id": 1, "order_id": "CA-1", "order_date": "2020-01-02",
                "ship_date": "2020-01-04", "ship_mode": "Second Class",
                "customer_id": "C1", "segment": "Consumer", "postal_code": 10001,
                "product_id": "P1", "sales": 10.0, "quantity": 1,
                "discount": 0.0, "profit": 2.0
            }]),
        );
        write(
            dir,
            "locations",
            json!([
                {"postal_code": "10001", "city": "New York City", "state": "New York",
                 "region": "East", "country_region": "United States"},
                {"postal_code": "n/a", "city": "", "state": "", "region": "", "country_region": ""}
            ]),
        );
        write(
            dir,
            "products",
            json!([
                {"product_id": "product_id", "category": "category",
                 "sub_category": "sub_category", "product_name": "product_name"},
                {"product_id": "P1", "category": "Furniture",
                 "sub_category": "Chairs", "product_name": "Hon Task Chair"}
            ]),
        );
    }

    #[test]
    fn test_prepare_cleans_and_validates() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), json!([{"customer_id": "C1", "customer_name": "Claire Gute"}]));

        let prepared = prepare(tmp.path()).unwrap();
        assert_eq!(prepared.cleaning.locations_dropped, 1);
        assert_eq!(prepared.cleaning.products_dropped, 1);
        assert_eq!(prepared.dataset.locations.len(), 1);
        assert_eq!(prepared.dataset.products.len(), 1);
        assert_eq!(prepared.validation.ship_before_order, 0);
    }

    #[test]
    fn test_prepare_rejects_duplicate_customers() {
        let tmp = TempDir::new().unwrap();
        seed(
            tmp.path(),
            json!([
                {"customer_id": "C1", "customer_name": "Claire Gute"},
                {"customer_id": "C1", "customer_name": "Claire G."}
            ]),
        );

        let err = prepare(tmp.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::SalesDuplicateKey);
    }

    #[test]
    fn test_prepare_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = prepare(&tmp.path().join("absent")).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::SalesDatasetMissing);
        assert!(err.is_fatal());
    }
}
