//! Timestamp provider
//!
//! Orders carry their creation time as fixed-format text. The clock is a
//! seam so the interactive session can be driven with a fixed time in tests.

use crate::types::TIMESTAMP_FORMAT;
use chrono::Local;

/// Source of formatted `YYYY-MM-DD HH:MM:SS` timestamps
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
