//! Severity levels and the threshold gate they are compared against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Log severity, ordered from least to most severe.
///
/// `Off` sorts below every real level and is only meaningful as a logger
/// threshold: it disables all output and is never attached to an entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Level {
    /// Threshold sentinel that suppresses every message.
    Off = 0,
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
}

/// Error returned when a level name cannot be parsed.
#[derive(Debug, Error)]
#[error("unrecognized log level: {0}")]
pub struct ParseLevelError(pub String);

impl Level {
    /// Uppercase name as it appears in rendered log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Off),
            1 => Some(Level::Trace),
            2 => Some(Level::Debug),
            3 => Some(Level::Info),
            4 => Some(Level::Warn),
            5 => Some(Level::Error),
            6 => Some(Level::Fatal),
            _ => None,
        }
    }

    /// Whether a message at this level passes a logger threshold.
    ///
    /// An `Off` threshold rejects everything, including `Fatal`.
    pub fn passes(self, threshold: Level) -> bool {
        threshold != Level::Off && self >= threshold
    }

    /// Parses a level name, falling back to `Info` for unknown input.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or(Level::Info)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("off") {
            Ok(Level::Off)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Level::Trace)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Level::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Level::Info)
        } else if s.eq_ignore_ascii_case("warn") || s.eq_ignore_ascii_case("warning") {
            Ok(Level::Warn)
        } else if s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("err") {
            Ok(Level::Error)
        } else if s.eq_ignore_ascii_case("fatal") || s.eq_ignore_ascii_case("critical") {
            Ok(Level::Fatal)
        } else {
            Err(ParseLevelError(s.to_string()))
        }
    }
}
