//! Tabular results produced by metric calculators

use serde::Serialize;
use serde_json::Value;

/// A typed result row with a fixed column order
///
/// `COLUMNS` lists the serialized field names in output order.
pub trait MetricRow: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// Ordered rows of named columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    /// Name of the metric that produced the table
    pub metric: String,
    /// Column names in output order
    pub columns: Vec<String>,
    /// Rows in result order, one value per column
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    /// Creates an empty table with the given columns
    pub fn empty(metric: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            metric: metric.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from typed rows, keeping their order.
    ///
    /// A field missing from a serialized row becomes `null`.
    pub fn from_rows<R: MetricRow>(
        metric: impl Into<String>,
        rows: &[R],
    ) -> Result<Self, serde_json::Error> {
        let mut table = Self::empty(metric, R::COLUMNS);
        table.rows.reserve(rows.len());

        for row in rows {
            let value = serde_json::to_value(row)?;
            let cells = R::COLUMNS
                .iter()
                .map(|column| value.get(*column).cloned().unwrap_or(Value::Null))
                .collect();
            table.rows.push(cells);
        }

        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Value at (row, column name)
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// All values of one column, top to bottom
    pub fn column_values(&self, column: &str) -> Vec<&Value> {
        match self.column_index(column) {
            Some(index) => self.rows.iter().filter_map(|r| r.get(index)).collect(),
            None => Vec::new(),
        }
    }

    /// Renders the table as aligned plain text.
    ///
    /// `null` cells print as `-` so an undefined figure never reads as zero.
    pub fn render_text(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        out.push_str(&format!("# {}\n", self.metric));
        push_line(&mut out, self.columns.iter().map(String::as_str), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, rule.iter().map(String::as_str), &widths);
        for row in &cells {
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
