//! Observability subsystem
//!
//! Structured JSON logging for lifecycle events, collection mutations
//! and per-request access lines.
//!
//! # Usage
//!
//! ```ignore
//! use wishlist::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::WishAdded, &[("id", "1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields at the event's own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
