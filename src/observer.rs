//! Observer interface for log entry fan-out.

use crate::entry::LogEntry;

/// Receives notifications from a [`Logger`](crate::logger::Logger).
///
/// Observers are shared handles (`Arc<dyn LogObserver>`); the logger holds
/// one reference and callers may keep their own. Callbacks run
/// synchronously on the logging thread, so a slow observer stalls the
/// caller — intentional simplicity over throughput. Only
/// [`handle_new_message`](LogObserver::handle_new_message) is mandatory;
/// the lifecycle callbacks default to no-ops.
///
/// Observers needing mutable state use interior mutability; all callbacks
/// take `&self`.
pub trait LogObserver: Send + Sync {
    /// Called once when the observer is added to a logger.
    fn handle_registered(&self, logger_name: &str) {
        let _ = logger_name;
    }

    /// Called once when the observer is removed from a logger.
    fn handle_unregistered(&self, logger_name: &str) {
        let _ = logger_name;
    }

    /// Called for every entry that passes the logger's level gate.
    fn handle_new_message(&self, entry: &LogEntry);

    /// Called when the logger is flushed.
    fn handle_flush(&self, logger_name: &str) {
        let _ = logger_name;
    }
}
