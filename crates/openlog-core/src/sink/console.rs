//! Console surface sink

use crate::format::interpolate;
use crate::types::Message;

use super::traits::{Channel, Sink};

/// A console-like logging surface with separate channels
///
/// The surface owns line breaks and any formatting of positionals;
/// callers pass the line and serialized positionals unchanged.
pub trait Console: Send + Sync {
    fn log(&self, line: &str, args: &[String]);

    fn warn(&self, line: &str, args: &[String]);

    fn error(&self, line: &str, args: &[String]);
}

/// Sink that dispatches to a [`Console`] by channel
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink<C> {
    console: C,
}

impl<C: Console> ConsoleSink<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// The wrapped console surface
    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<C: Console> Sink for ConsoleSink<C> {
    fn write(&self, channel: Channel, line: &str, args: &[Message]) {
        let args: Vec<String> = args.iter().map(Message::serialize).collect();
        match channel {
            Channel::Log => self.console.log(line, &args),
            Channel::Warn => self.console.warn(line, &args),
            Channel::Error => self.console.error(line, &args),
        }
    }
}

/// Console surface for native hosts
///
/// Behaves like a Node console: `log` goes to stdout, `warn` and
/// `error` to stderr, with `%` directives applied to positionals.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }

    fn render(line: &str, args: &[String]) -> String {
        let args: Vec<Message> = args.iter().map(Message::from).collect();
        interpolate(line, &args)
    }
}

impl Console for StdConsole {
    fn log(&self, line: &str, args: &[String]) {
        println!("{}", Self::render(line, args));
    }

    fn warn(&self, line: &str, args: &[String]) {
        eprintln!("{}", Self::render(line, args));
    }

    fn error(&self, line: &str, args: &[String]) {
        eprintln!("{}", Self::render(line, args));
    }
}
