//! Dataset loader for reading the four tables from a data directory
//!
//! Layout:
//! - `<data_dir>/customers.json`
//! - `<data_dir>/orders.json`
//! - `<data_dir>/locations.json`
//! - `<data_dir>/products.json`
//!
//! Each file is a JSON array of row objects. Missing or malformed files
//! are FATAL.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::dataset::{Dataset, RawDataset, CUSTOMERS, LOCATIONS, ORDERS, PRODUCTS};
use super::errors::{SchemaError, SchemaResult};

/// Reads and writes table files under a single data directory.
pub struct DatasetLoader {
    /// Directory containing table files
    data_dir: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader for the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing a table.
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", table))
    }

    /// Loads all four tables.
    pub fn load(&self) -> SchemaResult<RawDataset> {
        Ok(RawDataset {
            customers: self.load_table(CUSTOMERS)?,
            orders: self.load_table(ORDERS)?,
            locations: self.load_table(LOCATIONS)?,
            products: self.load_table(PRODUCTS)?,
        })
    }

    /// Loads a single table file into typed rows.
    fn load_table<T: DeserializeOwned>(&self, table: &str) -> SchemaResult<Vec<T>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Err(SchemaError::dataset_missing(table, path.display()));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| SchemaError::malformed(table, format!("Failed to read file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| SchemaError::malformed(table, format!("Invalid JSON: {}", e)))
    }

    /// Writes a cleaned dataset as table files under `out_dir`.
    ///
    /// Returns the paths written, in table order.
    pub fn save(dataset: &Dataset, out_dir: &Path) -> SchemaResult<Vec<PathBuf>> {
        if !out_dir.exists() {
            fs::create_dir_all(out_dir)
                .map_err(|e| SchemaError::write_failed(out_dir.display(), e.to_string()))?;
        }

        let writer = DatasetLoader::new(out_dir);
        Ok(vec![
            writer.save_table(CUSTOMERS, &dataset.customers)?,
            writer.save_table(ORDERS, &dataset.orders)?,
            writer.save_table(LOCATIONS, &dataset.locations)?,
            writer.save_table(PRODUCTS, &dataset.products)?,
        ])
    }

    fn save_table<T: Serialize>(&self, table: &str, rows: &[T]) -> SchemaResult<PathBuf> {
        let path = self.table_path(table);

        let content = serde_json::to_string_pretty(rows)
            .map_err(|e| SchemaError::write_failed(path.display(), e.to_string()))?;

        fs::write(&path, content)
            .map_err(|e| SchemaError::write_failed(path.display(), e.to_string()))?;

        Ok(path)
    }
}
