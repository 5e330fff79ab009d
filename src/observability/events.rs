//! Observable events
//!
//! Every log line carries one of these as its `event` key.

use std::fmt;

use super::logger::Severity;

/// Observable events in the wish list service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Listener bound, ready for requests
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,
    /// Server could not start or stopped with an error
    ServerFailed,

    // Collection
    WishAdded,
    WishUpdated,
    WishRemoved,

    // Requests
    /// Request answered with a client error
    RequestRejected,
    /// Request finished (access log)
    RequestCompleted,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "WISHLIST_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "WISHLIST_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",

            Event::WishAdded => "WISH_ADDED",
            Event::WishUpdated => "WISH_UPDATED",
            Event::WishRemoved => "WISH_REMOVED",

            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestCompleted => "REQUEST_COMPLETE",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ServerFailed => Severity::Fatal,
            Event::RequestRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
