//! Result tables
//!
//! Every calculator returns typed rows; `ResultTable` is the uniform,
//! column-ordered form handed to output.

mod table;

pub use table::{MetricRow, ResultTable};
