//! Per-level color schemes

use crate::colors::Color;

use super::LogLevel;

/// Colors applied to each part of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub timestamp: Color,
    pub prefix: Color,
    /// Message color; `None` leaves the message uncolored
    pub message: Option<Color>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            timestamp: Color::Gray,
            prefix: Color::Gray,
            message: None,
        }
    }
}

impl ColorScheme {
    /// Resolve the scheme for a level
    pub fn for_level(level: LogLevel) -> Self {
        let base = Self::default();
        match level {
            LogLevel::Debug => Self {
                message: Some(Color::Gray),
                ..base
            },
            LogLevel::Info => Self {
                prefix: Color::Blue,
                ..base
            },
            LogLevel::Success => Self::uniform(Color::Green),
            LogLevel::Warning => Self::uniform(Color::Yellow),
            LogLevel::Error => Self::uniform(Color::Red),
        }
    }

    fn uniform(color: Color) -> Self {
        Self {
            timestamp: color,
            prefix: color,
            message: None,
        }
    }
}
