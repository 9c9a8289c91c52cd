//! salesmetrics - analytics over a retail sales dataset
//!
//! A dataset of four tables (customers, orders, locations, products) is
//! loaded, cleaned and validated, checked for orphaned orders, and then
//! fed to a catalogue of metric calculators that each return one table.

pub mod cli;
pub mod integrity;
pub mod metrics;
pub mod observability;
pub mod report;
pub mod schema;
