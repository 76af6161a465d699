use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, Result, prelude::*};

/// An inclusive span of calendar days.
///
/// Ranges produced by the period resolvers always satisfy `start <= end`.
/// Explicit ranges supplied by callers are taken as given; use
/// [`DateRange::checked`] when the ordering must be enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Failures specific to `start/end` range text and ordering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range {start}/{end} ends before it starts")]
    InvalidRange {
        start: CalendarDate,
        end:   CalendarDate,
    },

    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Text that is not exactly two dates joined by `RANGE_SEPARATOR`.
    #[error("malformed date range {0:?}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Pairs two dates without checking their order.
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Pairs two dates, rejecting `start > end`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] for reversed bounds.
    pub fn checked(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        let range = Self::new(start, end);
        if range.is_ordered() { Ok(range) } else { Err(RangeError::InvalidRange { start, end }) }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Both bounds as `YYYY-MM-DD` strings.
    pub fn to_strings(&self) -> (String, String) {
        (self.start.to_string(), self.end.to_string())
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Number of days covered, counting both bounds. Zero or negative for an
    /// unordered range.
    pub fn num_days(&self) -> i64 {
        (self.end.as_naive() - self.start.as_naive()).num_days() + 1
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when at least one day lies in both ranges.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Applies a fallible transformation to both bounds, start first.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<E, F>(self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(CalendarDate) -> Result<CalendarDate, E>,
    {
        let start = f(self.start)?;
        let end = f(self.end)?;
        Ok(Self { start, end })
    }
}

impl From<(CalendarDate, CalendarDate)> for DateRange {
    fn from((start, end): (CalendarDate, CalendarDate)) -> Self {
        Self::new(start, end)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    /// Parses `start/end`. Ordering is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bounds = s.split(RANGE_SEPARATOR);
        match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(start), Some(end), None) => Ok(Self::new(start.parse()?, end.parse()?)),
            _ => Err(RangeError::InvalidFormat(s.to_owned())),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
