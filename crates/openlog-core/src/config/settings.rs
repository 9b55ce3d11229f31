//! Logger configuration and level gating

use serde::{Deserialize, Serialize};

use crate::types::LogLevel;

use super::traits::VariableSource;

/// Variable holding the debug selector
pub const DEBUG_VARIABLE: &str = "DEBUG";

/// Variable holding the level selector
pub const LOG_LEVEL_VARIABLE: &str = "LOG_LEVEL";

/// The two selectors read when a logger is constructed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    /// `"1"`/`"true"` enables every logger; any other value enables
    /// loggers whose name starts with it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    /// When set, only the level with this name prints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read both selectors from a variable source
    pub fn from_source(source: &dyn VariableSource) -> Self {
        Self {
            debug: source.get_variable(DEBUG_VARIABLE),
            log_level: source.get_variable(LOG_LEVEL_VARIABLE),
        }
    }

    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Whether a logger with this name is enabled
    pub fn enables(&self, name: &str) -> bool {
        match self.debug.as_deref() {
            Some("1") | Some("true") => true,
            Some(selector) => name.starts_with(selector),
            None => false,
        }
    }
}

/// Gating decision computed once per logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    enabled: bool,
    levels: [bool; 5],
}

impl Gate {
    /// Evaluate the selectors for a logger name
    pub fn evaluate(config: &LoggerConfig, name: &str) -> Self {
        let enabled = config.enables(name);
        let mut levels = [false; 5];

        if enabled {
            for (slot, level) in levels.iter_mut().zip(LogLevel::ALL) {
                *slot = match config.log_level.as_deref() {
                    Some(selector) => level.matches_selector(selector),
                    None => true,
                };
            }
        }

        Self { enabled, levels }
    }

    /// A gate with everything off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            levels: [false; 5],
        }
    }

    /// Whether logging is enabled for the logger at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether calls at this level produce output
    pub fn allows(&self, level: LogLevel) -> bool {
        self.levels[Self::slot(level)]
    }

    fn slot(level: LogLevel) -> usize {
        match level {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Success => 2,
            LogLevel::Warning => 3,
            LogLevel::Error => 4,
        }
    }
}
