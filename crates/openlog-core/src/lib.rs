//! OpenLog Core
//!
//! A small leveled logging facade with colorized, timestamped console
//! output. The same [`Logger`] works in a process (stdout/stderr,
//! environment variables) and on a console surface such as a browser
//! page (console channels, global variables).
//!
//! ## Gating
//!
//! Each logger reads two variables when it is constructed:
//! - `DEBUG`: `1` or `true` enables every logger; any other value enables
//!   loggers whose name starts with it.
//! - `LOG_LEVEL`: when set, only the level with exactly that name prints.
//!
//! ```rust,ignore
//! use openlog_core::Logger;
//!
//! // DEBUG=parser LOG_LEVEL=info
//! let logger = Logger::new("parser");
//! let timer = logger.info("start parsing...");
//! logger.extend("lexer").success("tokens ready");
//! timer.stop("parsed");
//! ```

pub mod types;
pub mod colors;
pub mod format;
pub mod config;
pub mod clock;
pub mod sink;
pub mod runtime;
pub mod logger;
pub mod error;

// Re-export commonly used types
pub use types::{serialize, ColorScheme, LogEntry, LogLevel, Message};

pub use colors::Color;

pub use config::{
    EnvVariables, GlobalVariables, MemoryVariables, VariableSource,
    LoggerConfig, Gate, DEBUG_VARIABLE, LOG_LEVEL_VARIABLE,
};

pub use clock::{Clock, ManualClock, SystemClock};

pub use sink::{Channel, Console, ConsoleSink, MemorySink, ProcessSink, Sink, StdConsole};

pub use runtime::Runtime;

pub use logger::{InfoTimer, Logger, LoggerBuilder};

pub use error::{LoggerError, LoggerResult};
