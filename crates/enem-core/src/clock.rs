//! Wall-clock source.
//!
//! Everything time-dependent in the core reads the current local time through
//! [`Clock`] so tests can pin it.

use std::cell::Cell;

use chrono::{Duration, Local, NaiveDateTime};

/// Local wall-clock time source.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A manually driven clock.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Milliseconds since the epoch, reading the local wall time as UTC.
/// Only used to seed monotonic record ids.
pub fn epoch_ms(at: NaiveDateTime) -> u64 {
    at.and_utc().timestamp_millis().max(0) as u64
}

/// Occurrence timestamp, e.g. `19/10/2026, 13:05:00`.
pub fn format_date_time(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Log entry timestamp, e.g. `13:05:00`.
pub fn format_time(at: NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}
