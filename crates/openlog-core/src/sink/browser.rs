//! Browser console surface (wasm32 hosts)

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::console;

use super::console::Console;

/// Forwards to the page's `console.log/warn/error`
///
/// Positionals are passed as extra arguments so the browser applies
/// its own `%s`/`%d` formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl BrowserConsole {
    pub fn new() -> Self {
        Self
    }

    fn arguments(line: &str, args: &[String]) -> Array {
        let values = Array::new();
        values.push(&JsValue::from_str(line));
        for arg in args {
            values.push(&JsValue::from_str(arg));
        }
        values
    }
}

impl Console for BrowserConsole {
    fn log(&self, line: &str, args: &[String]) {
        console::log(&Self::arguments(line, args));
    }

    fn warn(&self, line: &str, args: &[String]) {
        console::warn(&Self::arguments(line, args));
    }

    fn error(&self, line: &str, args: &[String]) {
        console::error(&Self::arguments(line, args));
    }
}
