//! Core traits
//!
//! The only seam in the core is the source of "today": record operations
//! take the date explicitly, and the console asks a [`Clock`] for it so that
//! tests can pin the calendar.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
