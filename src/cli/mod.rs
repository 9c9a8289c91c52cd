//! CLI module for salesmetrics
//!
//! Provides command-line interface for:
//! - check: load, clean and validate a dataset, report orphaned orders
//! - clean: write the cleaned tables to an output directory
//! - report: compute one metric
//! - report-all: compute every metric in parallel

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat, ReportOpts};
pub use commands::{check, clean, report, report_all, run, run_command, run_command_to};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, response_envelope, write_error, write_response, write_tables};
