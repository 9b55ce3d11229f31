//! Output sink trait

use std::sync::Arc;

use crate::types::{LogLevel, Message};

/// Output channel a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `console.log` / standard output
    Log,
    /// `console.warn` / standard error
    Warn,
    /// `console.error` / standard error
    Error,
}

impl Channel {
    /// Channel a level is dispatched to
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug | LogLevel::Info | LogLevel::Success => Channel::Log,
            LogLevel::Warning => Channel::Warn,
            LogLevel::Error => Channel::Error,
        }
    }

    /// Whether a process host writes this channel to standard error
    pub fn is_stderr(&self) -> bool {
        !matches!(self, Channel::Log)
    }
}

/// Host output surface for formatted lines
///
/// Implementations:
/// - `ProcessSink`: stdout/stderr byte streams, newline terminated
/// - `ConsoleSink`: a console surface with log/warn/error channels
/// - `MemorySink`: records writes for testing
///
/// Writes are best effort; a failing host stream is not reported.
pub trait Sink: Send + Sync {
    /// Write one composed line plus its positional values
    fn write(&self, channel: Channel, line: &str, args: &[Message]);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
