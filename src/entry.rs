//! Immutable record of a single logged event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// One logged event: timestamp, severity, originating logger and the final
/// message text (placeholders substituted, optionally sanitized).
///
/// The message does not include the timestamp/level/name prefix; that
/// rendering is derived on demand by [`LogEntry::formatted_message`]. Each
/// sink receives its own copy, so entries never share mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub logger_name: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        level: Level,
        logger_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level,
            logger_name: logger_name.into(),
            message: message.into(),
        }
    }

    /// Full human-readable line:
    /// `YYYY-MM-DD HH:MM:SS.mmm [LEVEL] [name] message`, with the name
    /// segment omitted for the unnamed global logger.
    pub fn formatted_message(&self) -> String {
        let mut line = format!(
            "{} [{}]",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level.as_str()
        );
        if !self.logger_name.is_empty() {
            line.push_str(" [");
            line.push_str(&self.logger_name);
            line.push(']');
        }
        line.push(' ');
        line.push_str(&self.message);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap() + chrono::Duration::milliseconds(7)
    }

    #[test]
    fn formatted_line_includes_name_when_present() {
        let entry = LogEntry::new(fixed_timestamp(), Level::Warn, "engine", "low oil");
        assert_eq!(
            entry.formatted_message(),
            "2025-03-14 09:26:53.007 [WARN] [engine] low oil"
        );
    }

    #[test]
    fn formatted_line_omits_empty_name() {
        let entry = LogEntry::new(fixed_timestamp(), Level::Info, "", "starting");
        assert_eq!(
            entry.formatted_message(),
            "2025-03-14 09:26:53.007 [INFO] starting"
        );
    }

    #[test]
    fn milliseconds_are_zero_padded() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let entry = LogEntry::new(ts, Level::Debug, "", "tick");
        assert!(entry.formatted_message().starts_with("2025-01-02 03:04:05.000 "));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let entry = LogEntry::new(fixed_timestamp(), Level::Error, "db", "boom");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"loggerName\":\"db\""));
        assert!(json.contains("\"level\":\"ERROR\""));

        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, "boom");
        assert_eq!(back.level, Level::Error);
    }
}
