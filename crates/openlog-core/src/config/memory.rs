//! In-memory variable source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::VariableSource;

/// In-memory variable source for testing and embedding
///
/// Values can be changed at any time; loggers only observe them when
/// they are constructed.
#[derive(Debug, Default)]
pub struct MemoryVariables {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryVariables {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Create a source with initial values
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Set a variable
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(name.into(), value.into());
    }

    /// Remove a variable
    pub fn remove(&self, name: &str) {
        self.vars.write().remove(name);
    }

    /// Remove every variable
    pub fn clear(&self) {
        self.vars.write().clear();
    }
}

impl VariableSource for MemoryVariables {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_variable(&self, name: &str) -> Option<String> {
        self.vars.read().get(name).cloned()
    }
}
