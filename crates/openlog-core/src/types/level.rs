//! Log level definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Log levels
///
/// Levels are not ordered: gating selects a single level by name,
/// there is no severity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Success,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl LogLevel {
    /// All levels, in declaration order
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Success,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    /// Glyph rendered before the prefix, if any
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            LogLevel::Success => Some("✔"),
            LogLevel::Warning => Some("⚠"),
            LogLevel::Error => Some("✖"),
            LogLevel::Debug | LogLevel::Info => None,
        }
    }

    /// Whether a level selector value names this level
    ///
    /// `warn` and `warning` both name the warning level.
    pub fn matches_selector(&self, selector: &str) -> bool {
        match self {
            LogLevel::Warning => selector == "warning" || selector == "warn",
            other => selector == other.as_str(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.matches_selector(s))
            .ok_or_else(|| LoggerError::UnknownLevel(s.to_string()))
    }
}
