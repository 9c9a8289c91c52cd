//! Observability subsystem
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - BEGIN/COMPLETE scopes with elapsed time
//!
//! Observability is read-only: nothing here changes what a calculator
//! returns, and logging failures are swallowed.
//!
//! ```ignore
//! use salesmetrics::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::DatasetLoaded, &[("orders", "9994")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
