//! Orphaned foreign key detection
//!
//! Every order is left-joined to Customer, Product and Location. An order
//! whose join leaves any dimension absent is reported with the list of
//! dimensions that did not match. The checker is advisory: it never
//! removes or repairs rows.

use std::fmt;

use serde::Serialize;

use crate::schema::{Dataset, PostalCode};

/// Dimension an order failed to join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Customer,
    Product,
    Location,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Customer => write!(f, "customer"),
            Dimension::Product => write!(f, "product"),
            Dimension::Location => write!(f, "location"),
        }
    }
}

/// An order with at least one unresolved key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrphanedOrder {
    pub row_id: i64,
    pub order_id: String,
    pub customer_id: String,
    pub product_id: String,
    pub postal_code: PostalCode,
    /// Dimensions without a matching row, in Customer, Product, Location order
    pub missing: Vec<Dimension>,
}

/// Diagnostic result of an integrity check
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IntegrityReport {
    pub orders_checked: usize,
    pub missing_customers: usize,
    pub missing_products: usize,
    pub missing_locations: usize,
    /// Offending orders in table order
    pub orphans: Vec<OrphanedOrder>,
}

impl IntegrityReport {
    /// True when every order resolved all three keys
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }
}

pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn check(dataset: &Dataset) -> IntegrityReport {
        let index = dataset.index();
        let mut report = IntegrityReport {
            orders_checked: dataset.orders.len(),
            ..IntegrityReport::default()
        };

        for joined in index.joined_orders() {
            if joined.is_complete() {
                continue;
            }

            let mut missing = Vec::with_capacity(3);
            if joined.customer.is_none() {
                report.missing_customers += 1;
                missing.push(Dimension::Customer);
            }
            if joined.product.is_none() {
                report.missing_products += 1;
                missing.push(Dimension::Product);
            }
            if joined.location.is_none() {
                report.missing_locations += 1;
                missing.push(Dimension::Location);
            }

            let order = joined.order;
            report.orphans.push(OrphanedOrder {
                row_id: order.row_id,
                order_id: order.order_id.clone(),
                customer_id: order.customer_id.clone(),
                product_id: order.product_id.clone(),
                postal_code: order.postal_code,
                missing,
            });
        }

        report
    }
}
