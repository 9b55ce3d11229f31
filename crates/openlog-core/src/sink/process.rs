//! Process stream sink

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::format::interpolate;
use crate::types::Message;

use super::traits::{Channel, Sink};

type BoxedWriter = Box<dyn Write + Send>;

enum Stream {
    Stdout,
    Stderr,
    Writer(Mutex<BoxedWriter>),
}

impl Stream {
    fn write_line(&self, text: &str) {
        let _ = match self {
            Stream::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            Stream::Stderr => io::stderr().lock().write_all(text.as_bytes()),
            Stream::Writer(writer) => {
                let mut writer = writer.lock();
                writer.write_all(text.as_bytes()).and_then(|_| writer.flush())
            }
        };
    }
}

/// Writes to the process's standard output and standard error
///
/// Positionals are interpolated into the line and every write ends
/// with a newline.
pub struct ProcessSink {
    out: Stream,
    err: Stream,
}

impl std::fmt::Debug for ProcessSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessSink").finish_non_exhaustive()
    }
}

impl Default for ProcessSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSink {
    /// Sink over the real stdout/stderr
    pub fn new() -> Self {
        Self {
            out: Stream::Stdout,
            err: Stream::Stderr,
        }
    }

    /// Sink over arbitrary writers standing in for stdout/stderr
    pub fn with_writers(
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            out: Stream::Writer(Mutex::new(Box::new(out))),
            err: Stream::Writer(Mutex::new(Box::new(err))),
        }
    }
}

impl Sink for ProcessSink {
    fn write(&self, channel: Channel, line: &str, args: &[Message]) {
        let mut text = interpolate(line, args);
        text.push('\n');

        if channel.is_stderr() {
            self.err.write_line(&text);
        } else {
            self.out.write_line(&text);
        }
    }
}
