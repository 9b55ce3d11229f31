//! The logger
//!
//! A [`Logger`] decides once, at construction, which of its levels print.
//! Gated-off calls return before any formatting or I/O.
//!
//! ```
//! use std::sync::Arc;
//! use openlog_core::{Logger, MemorySink, MemoryVariables};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder("parser")
//!     .variables(Arc::new(MemoryVariables::with_vars([("DEBUG", "parser")])))
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.extend("lexer").info("tokenizing");
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{SharedClock, SystemClock};
use crate::colors;
use crate::config::{Gate, LoggerConfig, SharedVariables};
use crate::format::format_timestamp;
use crate::runtime::Runtime;
use crate::sink::{Channel, SharedSink};
use crate::types::{ColorScheme, LogEntry, LogLevel, Message};

struct Inner {
    name: String,
    prefix: String,
    gate: Gate,
    sink: SharedSink,
    clock: SharedClock,
    variables: SharedVariables,
}

/// A named, leveled console logger
///
/// Cloning is cheap and clones share the same name and gate.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("gate", &self.inner.gate)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a logger for the detected runtime
    ///
    /// Reads `DEBUG` and `LOG_LEVEL` now; later changes to them do not
    /// affect this instance.
    pub fn new(name: impl Into<String>) -> Self {
        LoggerBuilder::new(name).build()
    }

    /// Start building a logger with injected collaborators
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    fn from_parts(
        name: String,
        sink: SharedSink,
        clock: SharedClock,
        variables: SharedVariables,
    ) -> Self {
        let config = LoggerConfig::from_source(&*variables);
        let gate = Gate::evaluate(&config, &name);
        let prefix = format!("[{}]", name);

        Self {
            inner: Arc::new(Inner {
                name,
                prefix,
                gate,
                sink,
                clock,
                variables,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The bracketed name rendered before each message
    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    /// Whether logging is enabled for this logger at all
    pub fn is_enabled(&self) -> bool {
        self.inner.gate.is_enabled()
    }

    /// Whether calls at `level` produce output
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        self.inner.gate.allows(level)
    }

    /// Derive a child logger named `<name>:<domain>`
    ///
    /// The child's gate is evaluated from the variables as they are now.
    pub fn extend(&self, domain: &str) -> Logger {
        Logger::from_parts(
            format!("{}:{}", self.inner.name, domain),
            Arc::clone(&self.inner.sink),
            Arc::clone(&self.inner.clock),
            Arc::clone(&self.inner.variables),
        )
    }

    pub fn debug(&self, message: impl Into<Message>) {
        self.debug_with(message, &[]);
    }

    pub fn debug_with(&self, message: impl Into<Message>, args: &[Message]) {
        if self.is_level_enabled(LogLevel::Debug) {
            self.log_entry(LogLevel::Debug, message.into(), args);
        }
    }

    /// Log at info level
    ///
    /// The returned timer measures from this call; stopping it logs a
    /// second info line with the elapsed milliseconds.
    pub fn info(&self, message: impl Into<Message>) -> InfoTimer {
        self.info_with(message, &[])
    }

    pub fn info_with(&self, message: impl Into<Message>, args: &[Message]) -> InfoTimer {
        if !self.is_level_enabled(LogLevel::Info) {
            return InfoTimer::inert();
        }

        let started = self.inner.clock.monotonic();
        self.log_entry(LogLevel::Info, message.into(), args);
        InfoTimer {
            logger: Some(self.clone()),
            started,
        }
    }

    pub fn success(&self, message: impl Into<Message>) {
        self.success_with(message, &[]);
    }

    pub fn success_with(&self, message: impl Into<Message>, args: &[Message]) {
        if self.is_level_enabled(LogLevel::Success) {
            self.log_entry(LogLevel::Success, message.into(), args);
        }
    }

    pub fn warning(&self, message: impl Into<Message>) {
        self.warning_with(message, &[]);
    }

    pub fn warning_with(&self, message: impl Into<Message>, args: &[Message]) {
        if self.is_level_enabled(LogLevel::Warning) {
            self.log_entry(LogLevel::Warning, message.into(), args);
        }
    }

    /// Alias for [`Logger::warning`]
    pub fn warn(&self, message: impl Into<Message>) {
        self.warning_with(message, &[]);
    }

    /// Alias for [`Logger::warning_with`]
    pub fn warn_with(&self, message: impl Into<Message>, args: &[Message]) {
        self.warning_with(message, args);
    }

    pub fn error(&self, message: impl Into<Message>) {
        self.error_with(message, &[]);
    }

    pub fn error_with(&self, message: impl Into<Message>, args: &[Message]) {
        if self.is_level_enabled(LogLevel::Error) {
            self.log_entry(LogLevel::Error, message.into(), args);
        }
    }

    /// Run `callback` only when logging is enabled, regardless of level
    pub fn only<F: FnOnce()>(&self, callback: F) {
        if self.is_enabled() {
            callback();
        }
    }

    fn log_entry(&self, level: LogLevel, message: Message, args: &[Message]) {
        let entry = LogEntry::new(self.inner.clock.now(), level, message);
        let line = self.render(&entry);
        self.inner.sink.write(Channel::for_level(level), &line, args);
    }

    fn render(&self, entry: &LogEntry) -> String {
        let scheme = ColorScheme::for_level(entry.level);

        let prefix = match entry.level.glyph() {
            Some(glyph) => format!("{} {}", glyph, self.inner.prefix),
            None => self.inner.prefix.clone(),
        };

        let message = entry.message.serialize();
        let message = match scheme.message {
            Some(color) => color.paint(&message),
            None => message,
        };

        format!(
            "{} {} {}",
            scheme.timestamp.paint(&format_timestamp(&entry.timestamp)),
            scheme.prefix.paint(&prefix),
            message
        )
    }
}

/// One-shot handle returned by [`Logger::info`]
///
/// Dropping it without stopping logs nothing.
#[derive(Debug)]
pub struct InfoTimer {
    logger: Option<Logger>,
    started: Duration,
}

impl InfoTimer {
    /// A timer whose `stop` logs nothing
    #[doc(hidden)]
    pub fn inert() -> Self {
        Self {
            logger: None,
            started: Duration::ZERO,
        }
    }

    /// Whether stopping will log anything
    pub fn is_active(&self) -> bool {
        self.logger.is_some()
    }

    /// Time since the opening `info` call; `None` for an inert timer
    pub fn elapsed(&self) -> Option<Duration> {
        self.logger
            .as_ref()
            .map(|logger| logger.inner.clock.monotonic().saturating_sub(self.started))
    }

    pub fn stop(self, message: impl Into<Message>) {
        self.stop_with(message, &[]);
    }

    /// Log `message` followed by the elapsed time, e.g. `done 12.50ms`
    pub fn stop_with(self, message: impl Into<Message>, args: &[Message]) {
        let Some(logger) = self.logger else {
            return;
        };

        let elapsed = logger.inner.clock.monotonic().saturating_sub(self.started);
        let millis = elapsed.as_secs_f64() * 1000.0;
        let message = format!(
            "{} {}",
            message.into().serialize(),
            colors::gray(&format!("{:.2}ms", millis))
        );
        logger.log_entry(LogLevel::Info, Message::Text(message), args);
    }
}

/// Builder for loggers with injected sink, clock or variables
///
/// Anything not set comes from the runtime: detected once per process
/// unless overridden with [`LoggerBuilder::runtime`].
pub struct LoggerBuilder {
    name: String,
    runtime: Option<Runtime>,
    sink: Option<SharedSink>,
    clock: Option<SharedClock>,
    variables: Option<SharedVariables>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime: None,
            sink: None,
            clock: None,
            variables: None,
        }
    }

    /// Use the defaults of this runtime instead of the detected one
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Source for the `DEBUG` and `LOG_LEVEL` selectors
    pub fn variables(mut self, variables: SharedVariables) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn build(self) -> Logger {
        let runtime = self.runtime.unwrap_or_else(Runtime::current);
        Logger::from_parts(
            self.name,
            self.sink.unwrap_or_else(|| runtime.sink()),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            self.variables.unwrap_or_else(|| runtime.variables()),
        )
    }
}

/// Log at debug level with positionals
///
/// Positionals are only converted when the level is enabled.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.debug($message)
    };
    ($logger:expr, $message:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_level_enabled($crate::LogLevel::Debug) {
            logger.debug_with($message, &[$($crate::Message::from($arg)),+]);
        }
    }};
}

/// Log at info level with positionals, returning the [`InfoTimer`]
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.info($message)
    };
    ($logger:expr, $message:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_level_enabled($crate::LogLevel::Info) {
            logger.info_with($message, &[$($crate::Message::from($arg)),+])
        } else {
            $crate::InfoTimer::inert()
        }
    }};
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.success($message)
    };
    ($logger:expr, $message:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_level_enabled($crate::LogLevel::Success) {
            logger.success_with($message, &[$($crate::Message::from($arg)),+]);
        }
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.warning($message)
    };
    ($logger:expr, $message:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_level_enabled($crate::LogLevel::Warning) {
            logger.warning_with($message, &[$($crate::Message::from($arg)),+]);
        }
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $message:expr $(,)?) => {
        $logger.error($message)
    };
    ($logger:expr, $message:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_level_enabled($crate::LogLevel::Error) {
            logger.error_with($message, &[$($crate::Message::from($arg)),+]);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::colors::{blue, gray, green, red, yellow};
    use crate::config::MemoryVariables;
    use crate::sink::{MemorySink, ProcessSink, SharedBuffer};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;
    use std::cell::Cell;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 1)
            .unwrap()
            .and_hms_milli_opt(12, 34, 56, 789)
            .unwrap()
    }

    struct Fixture {
        sink: Arc<MemorySink>,
        clock: Arc<ManualClock>,
        vars: Arc<MemoryVariables>,
    }

    impl Fixture {
        fn new(vars: &[(&str, &str)]) -> Self {
            Self {
                sink: Arc::new(MemorySink::new()),
                clock: Arc::new(ManualClock::new(fixed_time())),
                vars: Arc::new(MemoryVariables::with_vars(vars.iter().copied())),
            }
        }

        fn logger(&self, name: &str) -> Logger {
            Logger::builder(name)
                .sink(self.sink.clone())
                .clock(self.clock.clone())
                .variables(self.vars.clone())
                .build()
        }
    }

    #[test]
    fn test_prefix_derived_from_name() {
        let fixture = Fixture::new(&[]);
        let logger = fixture.logger("parser");
        assert_eq!(logger.name(), "parser");
        assert_eq!(logger.prefix(), "[parser]");
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let fixture = Fixture::new(&[]);
        let logger = fixture.logger("parser");

        logger.debug("d");
        let timer = logger.info("i");
        logger.success("s");
        logger.warning("w");
        logger.warn("w");
        logger.error("e");
        timer.stop("done");

        assert!(!logger.is_enabled());
        assert!(fixture.sink.is_empty());
    }

    #[test]
    fn test_enabled_formats() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");
        let ts = "12:34:56:789";

        logger.info("hello world");
        logger.success("ok!");
        logger.warning("simple warning");
        logger.error("oops");
        logger.debug("details");

        assert_eq!(
            fixture.sink.lines(Channel::Log),
            vec![
                format!("{} {} hello world", gray(ts), blue("[parser]")),
                format!("{} {} ok!", green(ts), green("✔ [parser]")),
                format!("{} {} {}", gray(ts), gray("[parser]"), gray("details")),
            ]
        );
        assert_eq!(
            fixture.sink.lines(Channel::Warn),
            vec![format!("{} {} simple warning", yellow(ts), yellow("⚠ [parser]"))]
        );
        assert_eq!(
            fixture.sink.lines(Channel::Error),
            vec![format!("{} {} oops", red(ts), red("✖ [parser]"))]
        );
    }

    #[test]
    fn test_process_sink_exact_output() {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let logger = Logger::builder("parser")
            .sink(Arc::new(ProcessSink::with_writers(out.clone(), err.clone())))
            .clock(Arc::new(ManualClock::new(fixed_time())))
            .variables(Arc::new(MemoryVariables::with_vars([("DEBUG", "1")])))
            .build();

        logger.info("hello");
        logger.error("oops");

        assert_eq!(
            out.contents(),
            format!("{} {} hello\n", gray("12:34:56:789"), blue("[parser]"))
        );
        assert_eq!(
            err.contents(),
            format!("{} {} oops\n", red("12:34:56:789"), red("✖ [parser]"))
        );
    }

    #[test]
    fn test_percent_kept_without_positionals() {
        let out = SharedBuffer::default();
        let logger = Logger::builder("cpu")
            .sink(Arc::new(ProcessSink::with_writers(out.clone(), std::io::sink())))
            .clock(Arc::new(ManualClock::new(fixed_time())))
            .variables(Arc::new(MemoryVariables::with_vars([("DEBUG", "1")])))
            .build();

        logger.info("load 100%% done");
        logger.info_with("load %d%% done", &[Message::from(50)]);

        assert_eq!(
            out.contents(),
            format!(
                "{ts} {prefix} load 100%% done\n{ts} {prefix} load 50% done\n",
                ts = gray("12:34:56:789"),
                prefix = blue("[cpu]")
            )
        );
    }

    #[test]
    fn test_level_selector_prints_one_level() {
        let fixture = Fixture::new(&[("DEBUG", "true"), ("LOG_LEVEL", "warning")]);
        let logger = fixture.logger("parser");

        logger.debug("d");
        logger.info("i");
        logger.success("s");
        logger.error("e");
        assert!(fixture.sink.is_empty());

        logger.warning("w");
        logger.warn("alias");
        assert_eq!(fixture.sink.lines(Channel::Warn).len(), 2);
        assert_eq!(fixture.sink.len(), 2);
    }

    #[test]
    fn test_unknown_level_selector_silences_levels() {
        let fixture = Fixture::new(&[("DEBUG", "true"), ("LOG_LEVEL", "verbose")]);
        let logger = fixture.logger("parser");

        logger.info("i");
        logger.error("e");

        assert!(fixture.sink.is_empty());
        assert!(logger.is_enabled());
    }

    #[test]
    fn test_namespace_selector() {
        let fixture = Fixture::new(&[("DEBUG", "parser")]);

        fixture.logger("parser").info("root");
        fixture.logger("network").info("other");
        fixture.logger("parser").extend("lexer").info("child");

        assert_eq!(fixture.sink.len(), 2);
    }

    #[test]
    fn test_extend_names_child() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let child = fixture.logger("parser").extend("x");

        assert_eq!(child.name(), "parser:x");
        assert_eq!(child.prefix(), "[parser:x]");
        assert_eq!(child.extend("y").prefix(), "[parser:x:y]");
    }

    #[test]
    fn test_extend_reevaluates_gate() {
        let fixture = Fixture::new(&[]);
        let parent = fixture.logger("parser");
        assert!(!parent.is_enabled());

        fixture.vars.set("DEBUG", "parser:lexer");
        let child = parent.extend("lexer");
        assert!(child.is_enabled());
        assert!(!parent.is_enabled());

        child.info("visible");
        parent.info("hidden");
        assert_eq!(fixture.sink.len(), 1);
    }

    #[test]
    fn test_gate_fixed_at_construction() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");

        fixture.vars.remove("DEBUG");
        logger.info("still printed");

        assert_eq!(fixture.sink.len(), 1);
        assert!(!fixture.logger("parser").is_enabled());
    }

    #[test]
    fn test_only_runs_when_enabled() {
        let calls = Cell::new(0);

        let enabled = Fixture::new(&[("DEBUG", "1"), ("LOG_LEVEL", "error")]);
        enabled.logger("parser").only(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);

        let disabled = Fixture::new(&[]);
        disabled.logger("parser").only(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_positionals_passed_separately() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");

        logger.info_with("user %s has %d items", &[Message::from("ann"), Message::from(3)]);

        let record = &fixture.sink.records()[0];
        assert!(record.line.ends_with("user %s has %d items"));
        assert_eq!(record.args, vec!["ann".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_message_serialization_in_line() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");

        logger.info(json!({"a": 1}));
        logger.info(());
        logger.info(serde_json::Value::Null);
        logger.info(42);

        let lines = fixture.sink.lines(Channel::Log);
        assert!(lines[0].ends_with(r#" {"a":1}"#));
        assert!(lines[1].ends_with(" undefined"));
        assert!(lines[2].ends_with(" null"));
        assert!(lines[3].ends_with(" 42"));
    }

    #[test]
    fn test_info_timer_reports_elapsed() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");

        let timer = logger.info("start parsing...");
        assert!(timer.is_active());
        fixture.clock.advance(Duration::from_micros(250_126));
        assert_eq!(timer.elapsed(), Some(Duration::from_micros(250_126)));
        timer.stop("parsed");

        let lines = fixture.sink.lines(Channel::Log);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with(&format!("parsed {}", gray("250.13ms"))));
        assert!(lines[1].contains(&blue("[parser]")));
    }

    #[test]
    fn test_info_timer_with_real_clock() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder("parser")
            .sink(sink.clone())
            .variables(Arc::new(MemoryVariables::with_vars([("DEBUG", "true")])))
            .build();

        let timer = logger.info("waiting");
        std::thread::sleep(Duration::from_millis(20));
        timer.stop("waited");

        let line = sink.lines(Channel::Log).pop().unwrap();
        let start = line.rfind("\x1b[90m").unwrap() + "\x1b[90m".len();
        let end = line.rfind("ms\x1b[0m").unwrap();
        let millis: f64 = line[start..end].parse().unwrap();
        assert!(millis >= 20.0, "elapsed {millis}ms");
    }

    #[test]
    fn test_inert_timer_when_info_gated() {
        let fixture = Fixture::new(&[("DEBUG", "true"), ("LOG_LEVEL", "error")]);
        let timer = fixture.logger("parser").info("hidden");

        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), None);
        timer.stop("never");
        assert!(fixture.sink.is_empty());
    }

    #[test]
    fn test_macros() {
        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");

        crate::log_debug!(logger, "d %s", "x");
        crate::log_info!(logger, "i").stop("done");
        crate::log_success!(logger, "s", 1, true);
        crate::log_warning!(logger, "w");
        crate::log_error!(logger, "e %d", 5);

        let records = fixture.sink.records();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].args, vec!["x".to_string()]);
        assert_eq!(records[3].args, vec!["1".to_string(), "true".to_string()]);
        assert_eq!(records[5].channel, Channel::Error);
    }

    #[test]
    fn test_macros_skip_conversion_when_gated() {
        let fixture = Fixture::new(&[]);
        let logger = fixture.logger("parser");
        let converted = Cell::new(false);
        let arg = || {
            converted.set(true);
            "value"
        };

        crate::log_error!(logger, "e %s", arg());

        assert!(!converted.get());
        assert!(fixture.sink.is_empty());
    }

    #[test]
    fn test_info_macro_skips_conversion_when_gated() {
        let fixture = Fixture::new(&[("DEBUG", "true"), ("LOG_LEVEL", "error")]);
        let logger = fixture.logger("parser");
        let converted = Cell::new(false);
        let arg = || {
            converted.set(true);
            7
        };

        let timer = crate::log_info!(logger, "i %d", arg());
        assert!(!timer.is_active());
        timer.stop("done");

        assert!(!converted.get());
        assert!(fixture.sink.is_empty());

        let fixture = Fixture::new(&[("DEBUG", "true")]);
        let logger = fixture.logger("parser");
        crate::log_info!(logger, "i %d", arg()).stop("done");
        assert!(converted.get());
        assert_eq!(fixture.sink.records()[0].args, vec!["7".to_string()]);
    }
}
