//! ANSI color helpers
//!
//! Codes are emitted unconditionally, with no terminal detection,
//! so output is identical in every runtime.

use std::fmt;

const RESET: &str = "\x1b[0m";

/// Named colors available to log schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Blue,
    Gray,
    Red,
    Green,
}

impl Color {
    /// ANSI escape sequence that starts this color
    pub fn code(&self) -> &'static str {
        match self {
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Gray => "\x1b[90m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
        }
    }

    /// Wrap text in this color
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.code(), text, RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Gray => "gray",
            Color::Red => "red",
            Color::Green => "green",
        };
        f.write_str(name)
    }
}

pub fn yellow(text: &str) -> String {
    Color::Yellow.paint(text)
}

pub fn blue(text: &str) -> String {
    Color::Blue.paint(text)
}

pub fn gray(text: &str) -> String {
    Color::Gray.paint(text)
}

pub fn red(text: &str) -> String {
    Color::Red.paint(text)
}

pub fn green(text: &str) -> String {
    Color::Green.paint(text)
}
