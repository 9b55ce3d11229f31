//! Time sources for timestamps and durations

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of wall-clock time and monotonic elapsed time
pub trait Clock: Send + Sync {
    /// Local wall-clock time, used for entry timestamps
    fn now(&self) -> NaiveDateTime;

    /// Monotonic reading, used only for measuring durations
    fn monotonic(&self) -> Duration;
}

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

/// The host clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to
///
/// Useful for testing exact output and measured durations.
#[derive(Debug)]
pub struct ManualClock {
    state: Mutex<(NaiveDateTime, Duration)>,
}

impl ManualClock {
    /// Create a clock frozen at the given wall-clock time
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            state: Mutex::new((now, Duration::ZERO)),
        }
    }

    /// Move both wall-clock and monotonic time forward
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.lock();
        let now = state.0;
        state.0 = chrono::Duration::from_std(by)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(now);
        state.1 += by;
    }

    /// Jump the wall clock without touching monotonic time
    pub fn set_now(&self, now: NaiveDateTime) {
        self.state.lock().0 = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.state.lock().0
    }

    fn monotonic(&self) -> Duration {
        self.state.lock().1
    }
}
