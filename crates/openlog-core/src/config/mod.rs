//! Configuration lookup and level gating
//!
//! Supports multiple variable sources:
//! - `EnvVariables`: process environment
//! - `GlobalVariables`: host globals
//! - `MemoryVariables`: in-memory for testing

mod traits;
mod env;
mod globals;
mod memory;
mod settings;

pub use traits::{SharedVariables, VariableSource};
pub use env::EnvVariables;
pub use globals::GlobalVariables;
#[cfg(not(target_arch = "wasm32"))]
pub use globals::{remove_global, set_global};
pub use memory::MemoryVariables;
pub use settings::{Gate, LoggerConfig, DEBUG_VARIABLE, LOG_LEVEL_VARIABLE};
