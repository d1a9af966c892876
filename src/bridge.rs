//! Observer forwarding entries into the `log` facade.

use crate::entry::LogEntry;
use crate::level::Level;
use crate::observer::LogObserver;

/// Forwards every entry to the global [`log`] logger, so applications
/// already wired to the `log` ecosystem (env_logger, syslog adapters and
/// the like) receive this crate's output without a second pipeline.
///
/// `Fatal` maps to [`log::Level::Error`], the facade's most severe level.
#[derive(Debug, Default)]
pub struct FacadeObserver;

impl FacadeObserver {
    pub fn new() -> Self {
        Self
    }

    fn facade_level(level: Level) -> Option<log::Level> {
        match level {
            Level::Off => None,
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error | Level::Fatal => Some(log::Level::Error),
        }
    }
}

impl LogObserver for FacadeObserver {
    fn handle_new_message(&self, entry: &LogEntry) {
        let Some(level) = Self::facade_level(entry.level) else {
            return;
        };
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", entry.message))
                .level(level)
                .target(&entry.logger_name)
                .build(),
        );
    }

    fn handle_flush(&self, _logger_name: &str) {
        log::logger().flush();
    }
}
