//! Dataset error types
//!
//! Error codes:
//! - SALES_DATASET_MISSING (FATAL)
//! - SALES_DATASET_MALFORMED (FATAL)
//! - SALES_DATASET_WRITE_FAILED (FATAL)
//! - SALES_EMPTY_KEY (REJECT)
//! - SALES_DUPLICATE_KEY (REJECT)

use std::fmt;

/// Severity levels for dataset errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Dataset rejected, nothing downstream may run on it
    Reject,
    /// Dataset could not be read or written at all
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Dataset-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Table file not found in the data directory
    SalesDatasetMissing,
    /// Table file unreadable or not valid for its entity
    SalesDatasetMalformed,
    /// Cleaned table could not be written
    SalesDatasetWriteFailed,
    /// Key attribute is empty
    SalesEmptyKey,
    /// Dimension key appears more than once
    SalesDuplicateKey,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::SalesDatasetMissing => "SALES_DATASET_MISSING",
            SchemaErrorCode::SalesDatasetMalformed => "SALES_DATASET_MALFORMED",
            SchemaErrorCode::SalesDatasetWriteFailed => "SALES_DATASET_WRITE_FAILED",
            SchemaErrorCode::SalesEmptyKey => "SALES_EMPTY_KEY",
            SchemaErrorCode::SalesDuplicateKey => "SALES_DUPLICATE_KEY",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::SalesEmptyKey | SchemaErrorCode::SalesDuplicateKey => {
                Severity::Reject
            }
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset error type with full context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Table the error was raised for, if any
    table: Option<String>,
}

impl SchemaError {
    /// Create a missing table file error
    pub fn dataset_missing(table: impl Into<String>, path: impl fmt::Display) -> Self {
        let table = table.into();
        Self {
            code: SchemaErrorCode::SalesDatasetMissing,
            message: format!("Table '{}' not found at '{}'", table, path),
            table: Some(table),
        }
    }

    /// Create a malformed table file error
    pub fn malformed(table: impl Into<String>, reason: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            code: SchemaErrorCode::SalesDatasetMalformed,
            message: format!("Malformed table '{}': {}", table, reason.into()),
            table: Some(table),
        }
    }

    /// Create a write failure error
    pub fn write_failed(path: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SalesDatasetWriteFailed,
            message: format!("Failed to write '{}': {}", path, reason.into()),
            table: None,
        }
    }

    /// Create an empty key error
    pub fn empty_key(table: impl Into<String>, field: &str, row: usize) -> Self {
        let table = table.into();
        Self {
            code: SchemaErrorCode::SalesEmptyKey,
            message: format!("Table '{}' row {}: '{}' is empty", table, row, field),
            table: Some(table),
        }
    }

    /// Create a duplicate key error
    pub fn duplicate_key(table: impl Into<String>, field: &str, value: impl fmt::Display) -> Self {
        let table = table.into();
        Self {
            code: SchemaErrorCode::SalesDuplicateKey,
            message: format!("Table '{}': duplicate {} '{}'", table, field, value),
            table: Some(table),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table name if applicable
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for dataset operations
pub type SchemaResult<T> = Result<T, SchemaError>;
