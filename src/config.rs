//! Optional file/env configuration for constructing loggers.
//!
//! Configuration is layered: serialized defaults, then `logbook.toml`,
//! then `LOGBOOK_`-prefixed environment variables, later layers winning.
//! Nothing here is consulted implicitly — callers opt in by loading a
//! [`LogConfig`] and handing [`LogConfig::build_logger`] to the registry
//! factory lookup.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::LogbookResult;
use crate::level::Level;
use crate::logger::Logger;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Threshold by name ("trace" .. "fatal", "off"); unknown names fall
    /// back to "info".
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_console")]
    pub console: bool,
    /// `None` leaves buffering off; `Some(0)` enables an unbounded buffer.
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
    #[serde(default = "default_clean")]
    pub clean_message: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_console() -> bool {
    true
}

fn default_clean() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console: default_console(),
            buffer_capacity: None,
            clean_message: default_clean(),
        }
    }
}

impl LogConfig {
    /// Loads `logbook.toml` from the working directory merged with
    /// `LOGBOOK_` environment variables.
    pub fn load() -> LogbookResult<Self> {
        Self::load_from("logbook.toml")
    }

    /// Same layering as [`load`](Self::load) with an explicit file path.
    pub fn load_from(path: impl AsRef<Path>) -> LogbookResult<Self> {
        let config = Figment::from(Serialized::defaults(LogConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("LOGBOOK_"))
            .extract()?;
        Ok(config)
    }

    /// Parsed threshold, defaulting to `Info` for unrecognized names.
    pub fn parsed_level(&self) -> Level {
        Level::from_str_or_default(&self.level)
    }

    /// Constructs a logger reflecting this configuration, suitable as a
    /// registry factory:
    /// `get_logger_with("app", |name| config.build_logger(name))`.
    pub fn build_logger(&self, name: &str) -> Logger {
        let logger = Logger::new(name);
        logger.set_log_level(self.parsed_level());
        if !self.console {
            logger.disable_console();
        }
        if let Some(capacity) = self.buffer_capacity {
            logger.enable_buffer(capacity);
        }
        if !self.clean_message {
            logger.disable_clean_message();
        }
        logger
    }
}
