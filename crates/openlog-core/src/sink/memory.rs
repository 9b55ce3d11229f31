//! In-memory sink

use parking_lot::Mutex;

use crate::types::Message;

use super::traits::{Channel, Sink};

/// One recorded write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub channel: Channel,
    /// The composed line, color codes included
    pub line: String,
    /// Serialized positionals
    pub args: Vec<String>,
}

/// Sink that keeps every write in memory
///
/// Useful for testing; nothing is printed.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Lines written to one channel
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.channel == channel)
            .map(|record| record.line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, channel: Channel, line: &str, args: &[Message]) {
        self.records.lock().push(Record {
            channel,
            line: line.to_string(),
            args: args.iter().map(Message::serialize).collect(),
        });
    }
}
