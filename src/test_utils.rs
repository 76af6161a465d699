//! Shorthand constructors for tests.

use crate::{CalendarDate, DateRange, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid year in test")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid month in test")
}

pub fn date(s: &str) -> CalendarDate {
    s.parse().unwrap_or_else(|e| panic!("invalid test date {s}: {e}"))
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end))
}

/// `(start, end)` as owned strings, the shape the string facade returns.
pub fn pair(start: &str, end: &str) -> (String, String) {
    (start.to_owned(), end.to_owned())
}
