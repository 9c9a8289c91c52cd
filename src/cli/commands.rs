//! CLI command implementations
//!
//! Every command prepares the dataset the same way (load, clean,
//! validate) and then either reports on it, writes it back out, or runs
//! calculators over it. Results go to the given writer (stdout for the
//! binary); logs go to stderr.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::integrity::{IntegrityChecker, IntegrityReport};
use crate::metrics::{Metric, ReportConfig, ReportRunner};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::report::ResultTable;
use crate::schema::{prepare, Dataset, DatasetLoader};

use super::args::{Cli, Command, OutputFormat, ReportOpts};
use super::errors::CliResult;
use super::io::{write_error, write_response, write_tables};

/// Main CLI entry point
///
/// Parses arguments, applies the log level and dispatches.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    Logger::set_min_severity(cli.log_level);
    run_command(cli.command)
}

/// Run a command with results on stdout
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    run_command_to(cmd, &mut stdout.lock())
}

/// Run a command, writing results to `out`.
///
/// A failing command also writes an error envelope to `out`.
pub fn run_command_to<W: Write>(cmd: Command, out: &mut W) -> CliResult<()> {
    let result = match cmd {
        Command::Check { data } => check(&data, out),
        Command::Clean { data, out: out_dir } => clean(&data, &out_dir, out),
        Command::Report { metric, opts } => report(&metric, &opts, out),
        Command::ReportAll { opts } => report_all(&opts, out),
    };

    if let Err(e) = &result {
        // The writer may already be gone; the caller still reports on stderr
        let _ = write_error(out, e.code_str(), e.message());
    }
    result
}

/// Load, clean and validate a dataset and report on its integrity
pub fn check<W: Write>(data_dir: &Path, out: &mut W) -> CliResult<()> {
    let prepared = prepare(data_dir)?;
    let integrity = check_integrity(&prepared.dataset);

    let data = json!({
        "cleaning": prepared.cleaning,
        "validation": {
            "ship_before_order": prepared.validation.ship_before_order,
        },
        "integrity": integrity,
    });
    write_response(out, data)
}

/// Write the cleaned tables to `out_dir`
pub fn clean<W: Write>(data_dir: &Path, out_dir: &Path, out: &mut W) -> CliResult<()> {
    let prepared = prepare(data_dir)?;
    let written = DatasetLoader::save(&prepared.dataset, out_dir)?;

    log_event_with_fields(
        Event::DatasetWritten,
        &[
            ("out_dir", &out_dir.display().to_string()),
            ("tables", &written.len().to_string()),
        ],
    );

    let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    let data = json!({
        "cleaning": prepared.cleaning,
        "written": files,
    });
    write_response(out, data)
}

/// Compute one metric
pub fn report<W: Write>(metric: &str, opts: &ReportOpts, out: &mut W) -> CliResult<()> {
    let metric: Metric = metric.parse()?;
    let config = load_config(opts)?;

    let prepared = prepare(&opts.data)?;
    check_integrity(&prepared.dataset);

    let runner = ReportRunner::new(&prepared.dataset, &config)?;
    let table = runner.run(metric)?;
    emit_one(out, opts.format, table)
}

/// Compute every metric
pub fn report_all<W: Write>(opts: &ReportOpts, out: &mut W) -> CliResult<()> {
    let config = load_config(opts)?;

    let prepared = prepare(&opts.data)?;
    check_integrity(&prepared.dataset);

    let runner = ReportRunner::new(&prepared.dataset, &config)?;
    let tables = runner.run_all()?;
    emit_all(out, opts.format, &tables)
}

/// Reads the config file when given, then applies flag overrides.
fn load_config(opts: &ReportOpts) -> CliResult<ReportConfig> {
    let mut config = match &opts.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    if let Some(year) = opts.year {
        config = config.with_year(year);
    }
    if let Some(n) = opts.top_n {
        config = config.with_top_products(n);
    }
    config.validate()?;

    let source = opts
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("source", &source)]);

    Ok(config)
}

/// Runs the integrity check and logs its outcome.
fn check_integrity(dataset: &Dataset) -> IntegrityReport {
    let report = IntegrityChecker::check(dataset);

    if report.is_clean() {
        log_event_with_fields(
            Event::IntegrityClean,
            &[("orders", &report.orders_checked.to_string())],
        );
    } else {
        log_event_with_fields(
            Event::IntegrityOrphansFound,
            &[
                ("orphans", &report.orphan_count().to_string()),
                ("missing_customers", &report.missing_customers.to_string()),
                ("missing_products", &report.missing_products.to_string()),
                ("missing_locations", &report.missing_locations.to_string()),
            ],
        );
    }
    report
}

fn emit_one<W: Write>(out: &mut W, format: OutputFormat, table: ResultTable) -> CliResult<()> {
    match format {
        OutputFormat::Table => write_tables(out, std::slice::from_ref(&table)),
        OutputFormat::Json => write_response(out, serde_json::to_value(table)?),
    }
}

fn emit_all<W: Write>(out: &mut W, format: OutputFormat, tables: &[ResultTable]) -> CliResult<()> {
    match format {
        OutputFormat::Table => write_tables(out, tables),
        OutputFormat::Json => {
            let data = tables
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<Value>, _>>()?;
            write_response(out, Value::Array(data))
        }
    }
}
