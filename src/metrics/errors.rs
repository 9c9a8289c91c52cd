//! # Metrics Errors
//!
//! Error types for configuration and calculator execution.

use thiserror::Error;

/// Result type for metrics operations
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Configuration and calculator errors
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Configuration file unreadable or not valid JSON
    #[error("Failed to read configuration '{path}': {reason}")]
    ConfigUnreadable { path: String, reason: String },

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metric name not in the catalogue
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    /// `require_clean` is set and the dataset has orphaned orders
    #[error("Dataset has {orphans} orphaned orders; a clean dataset is required")]
    IntegrityGate { orphans: usize },

    /// Result rows could not be serialized
    #[error("Failed to serialize result rows: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MetricsError {
    /// Stable error code for output envelopes
    pub fn code(&self) -> &'static str {
        match self {
            MetricsError::ConfigUnreadable { .. } => "SALES_METRIC_CONFIG_UNREADABLE",
            MetricsError::InvalidConfig(_) => "SALES_METRIC_CONFIG_INVALID",
            MetricsError::UnknownMetric(_) => "SALES_METRIC_UNKNOWN",
            MetricsError::IntegrityGate { .. } => "SALES_METRIC_INTEGRITY_GATE",
            MetricsError::Serialization(_) => "SALES_METRIC_SERIALIZATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MetricsError::IntegrityGate { orphans: 4 };
        assert!(err.to_string().contains("4 orphaned"));
        assert_eq!(err.code(), "SALES_METRIC_INTEGRITY_GATE");

        let err = MetricsError::UnknownMetric("churn".into());
        assert_eq!(err.to_string(), "Unknown metric 'churn'");
    }
}
