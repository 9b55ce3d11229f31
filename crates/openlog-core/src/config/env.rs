//! Process environment variable source

use std::env;

use super::traits::VariableSource;

/// Reads variables from the process environment
///
/// An empty variable counts as defined: `DEBUG=` is not the same as an
/// unset `DEBUG`. Values that are not valid UTF-8 are read lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvVariables {
    _private: (),
}

impl EnvVariables {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl VariableSource for EnvVariables {
    fn name(&self) -> &str {
        "env"
    }

    fn get_variable(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
