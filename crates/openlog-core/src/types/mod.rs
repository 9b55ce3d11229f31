//! Core value types of the logging facade

mod level;
mod message;
mod entry;
mod scheme;

pub use level::LogLevel;
pub use message::{serialize, Message};
pub(crate) use message::format_number;
pub use entry::LogEntry;
pub use scheme::ColorScheme;
