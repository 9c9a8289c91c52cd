//! Dataset subsystem
//!
//! Entities, loading, cleaning and validation for the four sales tables.
//!
//! # Stages
//!
//! 1. `DatasetLoader` reads raw tables from a data directory
//! 2. `Cleaner` drops malformed location rows and header product rows
//! 3. `DatasetValidator` rejects empty or repeated keys
//!
//! Only a `Dataset` that passed all three is handed to calculators;
//! `prepare` runs the stages in order.

mod cleaner;
mod dataset;
mod errors;
mod loader;
mod pipeline;
mod types;
mod validator;

pub use cleaner::{Cleaner, CleaningReport};
pub use dataset::{
    Dataset, DatasetIndex, JoinedOrder, RawDataset, CUSTOMERS, LOCATIONS, ORDERS, PRODUCTS,
};
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use loader::DatasetLoader;
pub use pipeline::{prepare, PreparedDataset};
pub use types::{Customer, Location, Order, Period, PostalCode, Product, RawLocation};
pub use validator::{DatasetValidator, ValidationSummary};
