//! Observable events for salesmetrics
//!
//! Events are explicit and typed. Each pipeline stage emits one of these
//! names so that a log stream can be followed without parsing messages.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Report configuration loaded and validated
    ConfigLoaded,

    // Dataset
    /// Dataset load begins
    DatasetLoadBegin,
    /// All four tables loaded
    DatasetLoaded,
    /// Dataset could not be loaded (FATAL)
    DatasetLoadFailed,
    /// Cleaning stage finished
    CleaningComplete,
    /// Validation passed
    ValidationComplete,
    /// Validation rejected the dataset
    ValidationRejected,
    /// Cleaned tables written to disk
    DatasetWritten,

    // Integrity
    /// Integrity check finished with no orphans
    IntegrityClean,
    /// Integrity check found orphaned orders
    IntegrityOrphansFound,

    // Reports
    /// Every metric was computed
    ReportAllComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::DatasetLoadBegin => "DATASET_LOAD_BEGIN",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetLoadFailed => "DATASET_LOAD_FAILED",
            Event::CleaningComplete => "CLEANING_COMPLETE",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::DatasetWritten => "DATASET_WRITTEN",

            Event::IntegrityClean => "INTEGRITY_CLEAN",
            Event::IntegrityOrphansFound => "INTEGRITY_ORPHANS_FOUND",

            Event::ReportAllComplete => "REPORT_ALL_COMPLETE",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetLoadFailed)
    }

    /// Returns true if this event should be surfaced as a warning
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Event::IntegrityOrphansFound | Event::ValidationRejected
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
