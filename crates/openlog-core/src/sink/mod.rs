//! Output sinks
//!
//! A formatted line goes to exactly one channel of one sink. Which sink
//! a logger uses is decided once, see [`crate::runtime`].

mod traits;
mod process;
mod console;
mod memory;
#[cfg(target_arch = "wasm32")]
mod browser;

pub use traits::{Channel, SharedSink, Sink};
pub use process::ProcessSink;
pub use console::{Console, ConsoleSink, StdConsole};
pub use memory::{MemorySink, Record};
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserConsole;

#[cfg(test)]
pub(crate) use process::tests::SharedBuffer;
