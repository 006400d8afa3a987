//! Time source and id generation

use crate::error::{JournalError, Result};
use chrono::{DateTime, Local};
use std::cell::Cell;
use std::fmt::Write;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Render `instant` with a strftime pattern, failing instead of panicking on
/// patterns chrono cannot format
pub fn format_instant(instant: DateTime<Local>, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern))
        .map_err(|_| JournalError::Config(format!("Cannot format date with '{}'", pattern)))?;
    Ok(out)
}

/// Wall-clock-derived ids that never repeat
///
/// Each id is the current epoch milliseconds, bumped past the last id issued
/// so two ids taken in the same millisecond (or after the clock steps back)
/// still differ.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Cell<i64>,
}

impl IdGenerator {
    /// Start above every id already in use
    pub fn seeded<I: IntoIterator<Item = i64>>(existing: I) -> Self {
        IdGenerator {
            last: Cell::new(existing.into_iter().max().unwrap_or(0)),
        }
    }

    /// Fails once the largest id in use is `i64::MAX`
    pub fn next_id(&self, now: DateTime<Local>) -> Result<i64> {
        let last = self.last.get();
        let floor = last
            .checked_add(1)
            .ok_or(JournalError::IdSpaceExhausted(last))?;
        let id = now.timestamp_millis().max(floor);
        self.last.set(id);
        Ok(id)
    }
}
