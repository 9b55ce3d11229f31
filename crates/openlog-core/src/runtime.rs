//! Execution context detection
//!
//! The runtime is detected once per process. It decides the default
//! sink and where selector variables are read from.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::{EnvVariables, GlobalVariables, SharedVariables};
use crate::sink::{ConsoleSink, ProcessSink, SharedSink};

/// Where the logger is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// A process with stdout/stderr streams and environment variables
    Process,
    /// A console surface with globals, e.g. a browser page
    Console,
}

static DETECTED: Lazy<Runtime> = Lazy::new(Runtime::detect);

static PROCESS_SINK: Lazy<SharedSink> = Lazy::new(|| {
    let sink: SharedSink = Arc::new(ProcessSink::new());
    sink
});

static CONSOLE_SINK: Lazy<SharedSink> = Lazy::new(|| {
    #[cfg(target_arch = "wasm32")]
    let console = crate::sink::BrowserConsole::new();
    #[cfg(not(target_arch = "wasm32"))]
    let console = crate::sink::StdConsole::new();
    let sink: SharedSink = Arc::new(ConsoleSink::new(console));
    sink
});

impl Runtime {
    /// Inspect the build target
    ///
    /// Browser targets (wasm32 without WASI) are console runtimes;
    /// everything else is a process.
    pub fn detect() -> Self {
        if cfg!(all(target_arch = "wasm32", not(target_os = "wasi"))) {
            Runtime::Console
        } else {
            Runtime::Process
        }
    }

    /// The runtime detected for this process, computed on first use
    pub fn current() -> Self {
        *DETECTED
    }

    /// Shared default sink for this runtime
    pub fn sink(&self) -> SharedSink {
        match self {
            Runtime::Process => Arc::clone(&PROCESS_SINK),
            Runtime::Console => Arc::clone(&CONSOLE_SINK),
        }
    }

    /// Variable source for this runtime
    pub fn variables(&self) -> SharedVariables {
        match self {
            Runtime::Process => Arc::new(EnvVariables::new()),
            Runtime::Console => Arc::new(GlobalVariables::new()),
        }
    }

    /// Look up a configuration variable the way this runtime does
    pub fn get_variable(&self, name: &str) -> Option<String> {
        self.variables().get_variable(name)
    }
}
