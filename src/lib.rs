//! # smart_dates
//!
//! Resolve symbolic reporting periods ("smart dates") such as `last_month`
//! or `this_quarter` into concrete, inclusive date ranges, and derive the
//! matching comparison range ("previous period", "same period last year").
//!
//! Every operation is available on typed values ([`CalendarDate`],
//! [`DateRange`], [`PeriodTag`], [`ComparisonTag`]) and through a thin string
//! facade that reads and writes `YYYY-MM-DD`:
//!
//! ```
//! let range = smart_dates::parse_query_dates("last_month", Some("2018-03-28")).unwrap();
//! assert_eq!(range, ("2018-02-01".to_owned(), "2018-02-28".to_owned()));
//! ```
//!
//! Resolution never consults the clock on its own: typed resolvers take
//! `today` as an argument, and the string facade only reads the local date
//! when the caller passes `None`.

mod consts;
mod delta;
mod error;
mod period;
mod prelude;
mod query;
mod range;
mod relative;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use delta::{DateDelta, delta_date};
pub use error::{Result, SmartDateError};
pub use period::{get_month_start, get_quarter_start, get_week_end, get_week_start, get_year_start};
pub use query::{PeriodTag, Query, parse_query_dates, parse_query_parts};
pub use range::{DateRange, RangeError};
pub use relative::{
    ComparisonTag, Shift, comparison_shift, parse_relative_dates, resolve_relative,
    supported_comparisons,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// One day of the proleptic Gregorian calendar, between `0001-01-01` and
/// `9999-12-31`.
///
/// Displays, parses and serializes as fixed-width `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Builds a date from numeric components, validating each of them.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .map(Self)
        .ok_or(ParseError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   day.get(),
        })
    }

    /// The local wall-clock date, read once per call.
    ///
    /// # Errors
    /// Fails only if the host clock reports a year outside `MIN_YEAR..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(Local::now().date_naive())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year(&self) -> u16 {
        // Invariant: MIN_YEAR..=MAX_YEAR
        self.0.year() as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        match u16::try_from(date.year()) {
            Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(Self(date)),
            Ok(year) => Err(ParseError::InvalidYear(year)),
            Err(_) => Err(ParseError::InvalidFormat(date.to_string())),
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let well_formed = parts.len() == DATE_FIELD_WIDTHS.len()
            && parts
                .iter()
                .zip(DATE_FIELD_WIDTHS)
                .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let invalid = |_| ParseError::InvalidFormat(s.to_owned());
        let year = parts[0].parse::<u16>().map_err(invalid)?;
        let month = parts[1].parse::<u8>().map_err(invalid)?;
        let day = parts[2].parse::<u8>().map_err(invalid)?;
        Self::from_ymd(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a caller-supplied `today`, or reads the wall clock when absent.
fn resolve_today(today: Option<&str>) -> Result<CalendarDate, SmartDateError> {
    match today {
        Some(s) => Ok(s.parse()?),
        None => Ok(CalendarDate::today()?),
    }
}
