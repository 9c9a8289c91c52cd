//! Referential integrity checks between orders and dimension tables

mod checker;

pub use checker::{Dimension, IntegrityChecker, IntegrityReport, OrphanedOrder};
