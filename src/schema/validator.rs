//! Dataset validator for key invariants
//!
//! Rejected:
//! - Empty customer_id, product_id or order_id
//! - Repeated customer_id, product_id or postal_code in a dimension table
//!
//! Counted but accepted:
//! - Orders shipped before they were ordered
//!
//! Validation never mutates the dataset and is deterministic: the first
//! offending row in table order is reported.

use std::collections::HashSet;

use super::dataset::{Dataset, CUSTOMERS, LOCATIONS, ORDERS, PRODUCTS};
use super::errors::{SchemaError, SchemaResult};

/// Outcome of a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    /// Orders whose ship_date precedes order_date
    pub ship_before_order: usize,
}

/// Validator that enforces key rules on a cleaned dataset.
pub struct DatasetValidator<'a> {
    dataset: &'a Dataset,
}

impl<'a> DatasetValidator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Validates all four tables.
    ///
    /// # Errors
    ///
    /// - SALES_EMPTY_KEY if a key attribute is blank
    /// - SALES_DUPLICATE_KEY if a dimension key repeats
    pub fn validate(&self) -> SchemaResult<ValidationSummary> {
        self.validate_customers()?;
        self.validate_products()?;
        self.validate_locations()?;
        self.validate_orders()
    }

    fn validate_customers(&self) -> SchemaResult<()> {
        let mut seen = HashSet::with_capacity(self.dataset.customers.len());
        for (row, customer) in self.dataset.customers.iter().enumerate() {
            if customer.customer_id.trim().is_empty() {
                return Err(SchemaError::empty_key(CUSTOMERS, "customer_id", row));
            }
            if !seen.insert(customer.customer_id.as_str()) {
                return Err(SchemaError::duplicate_key(
                    CUSTOMERS,
                    "customer_id",
                    &customer.customer_id,
                ));
            }
        }
        Ok(())
    }

    fn validate_products(&self) -> SchemaResult<()> {
        let mut seen = HashSet::with_capacity(self.dataset.products.len());
        for (row, product) in self.dataset.products.iter().enumerate() {
            if product.product_id.trim().is_empty() {
                return Err(SchemaError::empty_key(PRODUCTS, "product_id", row));
            }
            if !seen.insert(product.product_id.as_str()) {
                return Err(SchemaError::duplicate_key(
                    PRODUCTS,
                    "product_id",
                    &product.product_id,
                ));
            }
        }
        Ok(())
    }

    fn validate_locations(&self) -> SchemaResult<()> {
        let mut seen = HashSet::with_capacity(self.dataset.locations.len());
        for location in &self.dataset.locations {
            if !seen.insert(location.postal_code) {
                return Err(SchemaError::duplicate_key(
                    LOCATIONS,
                    "postal_code",
                    location.postal_code,
                ));
            }
        }
        Ok(())
    }

    fn validate_orders(&self) -> SchemaResult<ValidationSummary> {
        let mut summary = ValidationSummary::default();
        for (row, order) in self.dataset.orders.iter().enumerate() {
            if order.order_id.trim().is_empty() {
                return Err(SchemaError::empty_key(ORDERS, "order_id", row));
            }
            if order.ship_date < order.order_date {
                summary.ship_before_order += 1;
            }
        }
        Ok(summary)
    }
}
