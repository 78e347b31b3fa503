use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local wall-clock time.
///
/// Calendar arithmetic works on naive local times so that "today" and
/// "midnight" always mean the user's calendar day. Elapsed-time arithmetic
/// pins them to instants first.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
