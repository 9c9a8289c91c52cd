//! CLI argument definitions using clap
//!
//! Commands:
//! - salesmetrics check --data <dir>
//! - salesmetrics clean --data <dir> --out <dir>
//! - salesmetrics report <metric> --data <dir>
//! - salesmetrics report-all --data <dir>

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::observability::Severity;

/// salesmetrics - analytics over a retail sales dataset
#[derive(Parser, Debug)]
#[command(name = "salesmetrics")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum log severity written to stderr
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Severity,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load, clean and validate a dataset and report orphaned orders
    Check {
        /// Directory holding the four table files
        #[arg(long, default_value = "./data")]
        data: PathBuf,
    },

    /// Write the cleaned tables to another directory
    Clean {
        /// Directory holding the four table files
        #[arg(long, default_value = "./data")]
        data: PathBuf,

        /// Output directory, created if missing
        #[arg(long)]
        out: PathBuf,
    },

    /// Compute one metric
    Report {
        /// Metric name, e.g. top_customers or top-customers
        metric: String,

        #[command(flatten)]
        opts: ReportOpts,
    },

    /// Compute every metric
    ReportAll {
        #[command(flatten)]
        opts: ReportOpts,
    },
}

/// Options shared by `report` and `report-all`
#[derive(Args, Debug, Clone)]
pub struct ReportOpts {
    /// Directory holding the four table files
    #[arg(long, default_value = "./data")]
    pub data: PathBuf,

    /// Report configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target year for every year-filtered metric
    #[arg(long)]
    pub year: Option<i32>,

    /// Ranks kept per region in top_products_by_region
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON envelope on one line
    Json,
    /// Aligned text tables
    Table,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
