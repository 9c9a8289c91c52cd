//! Output handling for CLI
//!
//! - JSON mode: one envelope object per command
//! - Table mode: aligned text tables
//!
//! Writers are passed in; the binary hands over stdout. Logs never go to
//! the result writer.

use std::io::Write;

use serde_json::Value;

use super::errors::CliResult;
use crate::report::ResultTable;

/// Build the success envelope
pub fn response_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// Build the error envelope
pub fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    write_value(out, &response_envelope(data))
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_value(out, &error_envelope(code, message))
}

/// Write result tables as text, separated by blank lines
pub fn write_tables<W: Write>(out: &mut W, tables: &[ResultTable]) -> CliResult<()> {
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", table.render_text())?;
    }
    out.flush()?;

    Ok(())
}

fn write_value<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelopes() {
        let ok = response_envelope(json!({"orders": 3}));
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["data"]["orders"], 3);

        let err = error_envelope("SALES_CLI_IO_ERROR", "closed");
        assert_eq!(err["status"], "error");
        assert_eq!(err["code"], "SALES_CLI_IO_ERROR");
        assert_eq!(err["message"], "closed");
    }

    #[test]
    fn test_write_response_is_one_line() {
        let mut buffer = Vec::new();
        write_response(&mut buffer, json!({"orders": 3})).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["data"]["orders"], 3);
    }

    #[test]
    fn test_write_tables_separates_tables() {
        let tables = [
            ResultTable::empty("top_customers", &["customer_id"]),
            ResultTable::empty("shipping_time_by_mode", &["ship_mode"]),
        ];
        let mut buffer = Vec::new();
        write_tables(&mut buffer, &tables).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# top_customers\n"));
        assert!(text.contains("\n\n# shipping_time_by_mode\n"));
    }
}
