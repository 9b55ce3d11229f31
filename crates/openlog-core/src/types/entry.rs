//! Per-call log entry

use chrono::NaiveDateTime;

use super::{LogLevel, Message};

/// A single log call, built fresh and discarded after formatting
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: LogLevel,
    pub message: Message,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, level: LogLevel, message: Message) -> Self {
        Self {
            timestamp,
            level,
            message,
        }
    }
}
