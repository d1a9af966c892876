//! Lightweight embeddable leveled logging.
//!
//! Loggers are looked up by name from a process-wide registry and fan each
//! accepted message out to three independently togglable sinks: console
//! output, an optional bounded in-memory buffer of recent entries, and
//! registered observers. Messages are templates with `{?}` (anonymous) and
//! `{N}` (positional) placeholders; supplier variants defer message
//! construction entirely until the level gate has passed.
//!
//! ```
//! let logger = logbook::get_logger("app");
//! logger.disable_console();
//! logger.enable_buffer(100);
//!
//! logbook::info!(logger, "listening on port {?}", 8080);
//! logger.warn("retry {0} of {1}", logbook::log_args![2, 5]);
//! logger.debug_supplier(|| format!("expensive dump: {:?}", vec![1, 2, 3]));
//!
//! let buffer = logger.buffer().expect("buffer enabled");
//! assert_eq!(buffer.len(), 2); // debug filtered at the default Info level
//! ```

// Core error handling
pub mod errors;

// Severity and gate
pub mod level;

// Message pipeline
pub mod convert;
pub mod formatter;
pub mod sanitize;

// Entries and sinks
pub mod buffer;
pub mod entry;
pub mod observer;

// Logger core & registry
pub mod logger;
pub mod registry;

// Scoped helpers
pub mod scope;

// `log` facade bridge
pub mod bridge;

// Configuration
pub mod config;

// Convenience macros (exported at the crate root)
mod macros;


// Re-export the public surface at the crate root
pub use buffer::LogBuffer;
pub use bridge::FacadeObserver;
pub use config::LogConfig;
pub use convert::ToLogString;
pub use entry::LogEntry;
pub use errors::{LogbookError, LogbookResult};
pub use formatter::format_message;
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
pub use observer::LogObserver;
pub use registry::{get_global_logger, get_logger, get_logger_with, LoggerRegistry};
pub use sanitize::clean_message;
pub use scope::{FlushScope, ObserverScope};
