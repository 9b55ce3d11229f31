//! Node.js bindings for OpenLog via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi::{JsFunction, JsUnknown, ValueType};
use napi_derive::napi;
use serde_json::Value;

use openlog_core::colors as core_colors;
use openlog_core::{
    InfoTimer as CoreInfoTimer,
    Logger as CoreLogger,
    Message,
};

// ============================================================================
// Value conversion
// ============================================================================

/// Convert a JS value into a message, keeping `undefined` apart from `null`
fn to_message(env: &Env, value: JsUnknown) -> Result<Message> {
    match value.get_type()? {
        ValueType::Undefined => Ok(Message::Undefined),
        ValueType::Function | ValueType::Symbol => coerce(value),
        _ => match env.from_js_value::<Value, _>(&value) {
            Ok(json) => Ok(Message::from(json)),
            Err(_) => coerce(value),
        },
    }
}

/// JS default string conversion
fn coerce(value: JsUnknown) -> Result<Message> {
    let text = value.coerce_to_string()?.into_utf8()?.into_owned()?;
    Ok(Message::Scalar(text))
}

fn to_positionals(env: &Env, values: Option<Vec<JsUnknown>>) -> Result<Vec<Message>> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|value| to_message(env, value))
        .collect()
}

// ============================================================================
// Logger
// ============================================================================

/// Leveled console logger
///
/// `DEBUG` and `LOG_LEVEL` are read from `process.env` when the logger
/// is constructed. Positionals arrive as one array; `index.js` gathers
/// them from rest arguments.
#[napi]
pub struct Logger {
    inner: CoreLogger,
}

#[napi]
impl Logger {
    #[napi(constructor)]
    pub fn new(name: String) -> Self {
        Self {
            inner: CoreLogger::new(name),
        }
    }

    #[napi(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[napi(getter)]
    pub fn prefix(&self) -> String {
        self.inner.prefix().to_string()
    }

    #[napi]
    pub fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    /// Derive a child logger named `<name>:<domain>`
    #[napi]
    pub fn extend(&self, domain: String) -> Logger {
        Logger {
            inner: self.inner.extend(&domain),
        }
    }

    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn debug(&self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<()> {
        if self.inner.is_level_enabled(openlog_core::LogLevel::Debug) {
            let args = to_positionals(&env, positionals)?;
            self.inner.debug_with(to_message(&env, message)?, &args);
        }
        Ok(())
    }

    /// Log at info level; call `stop()` on the result to log the elapsed time
    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn info(&self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<InfoTimer> {
        if !self.inner.is_level_enabled(openlog_core::LogLevel::Info) {
            return Ok(InfoTimer { inner: None });
        }
        let args = to_positionals(&env, positionals)?;
        let timer = self.inner.info_with(to_message(&env, message)?, &args);
        Ok(InfoTimer { inner: Some(timer) })
    }

    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn success(&self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<()> {
        if self.inner.is_level_enabled(openlog_core::LogLevel::Success) {
            let args = to_positionals(&env, positionals)?;
            self.inner.success_with(to_message(&env, message)?, &args);
        }
        Ok(())
    }

    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn warning(&self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<()> {
        if self.inner.is_level_enabled(openlog_core::LogLevel::Warning) {
            let args = to_positionals(&env, positionals)?;
            self.inner.warning_with(to_message(&env, message)?, &args);
        }
        Ok(())
    }

    /// Alias for `warning`
    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn warn(&self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<()> {
        self.warning(env, message, positionals)
    }

    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn error(&self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<()> {
        if self.inner.is_level_enabled(openlog_core::LogLevel::Error) {
            let args = to_positionals(&env, positionals)?;
            self.inner.error_with(to_message(&env, message)?, &args);
        }
        Ok(())
    }

    /// Invoke `callback` only when logging is enabled for this logger
    #[napi]
    pub fn only(&self, callback: JsFunction) -> Result<()> {
        if self.inner.is_enabled() {
            callback.call_without_args(None)?;
        }
        Ok(())
    }
}

// ============================================================================
// InfoTimer
// ============================================================================

/// Handle returned by `Logger.info`
#[napi]
pub struct InfoTimer {
    inner: Option<CoreInfoTimer>,
}

#[napi]
impl InfoTimer {
    /// Milliseconds since the opening `info` call
    #[napi]
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.inner
            .as_ref()
            .and_then(CoreInfoTimer::elapsed)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
    }

    /// Log `message` followed by the elapsed time. Later calls do nothing.
    #[napi(ts_args_type = "message: unknown, positionals?: unknown[]")]
    pub fn stop(&mut self, env: Env, message: JsUnknown, positionals: Option<Vec<JsUnknown>>) -> Result<()> {
        if let Some(timer) = self.inner.take() {
            let args = to_positionals(&env, positionals)?;
            timer.stop_with(to_message(&env, message)?, &args);
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Render a value the way log messages are rendered
#[napi]
pub fn serialize(env: Env, value: JsUnknown) -> Result<String> {
    Ok(to_message(&env, value)?.serialize())
}

#[napi]
pub fn yellow(text: String) -> String {
    core_colors::yellow(&text)
}

#[napi]
pub fn blue(text: String) -> String {
    core_colors::blue(&text)
}

#[napi]
pub fn gray(text: String) -> String {
    core_colors::gray(&text)
}

#[napi]
pub fn red(text: String) -> String {
    core_colors::red(&text)
}

#[napi]
pub fn green(text: String) -> String {
    core_colors::green(&text)
}
