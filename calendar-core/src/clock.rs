use chrono::NaiveDate;
use std::fmt;

/// Source of "today" for a calendar instance
pub trait Clock: fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Today's date on the local machine
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
