//! Variable source trait

use std::sync::Arc;

/// Read-only lookup of configuration variables by name
///
/// Implementations:
/// - `EnvVariables`: process environment (process runtime)
/// - `GlobalVariables`: host globals (console runtime)
/// - `MemoryVariables`: in-memory map for testing and embedding
pub trait VariableSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a variable; `None` when it is not defined
    fn get_variable(&self, name: &str) -> Option<String>;
}

/// Type alias for an Arc-wrapped variable source
pub type SharedVariables = Arc<dyn VariableSource>;
