//! Error types for smart date resolution.

use crate::range::RangeError;
use crate::{CalendarDate, ParseError};

/// Everything that can go wrong while shifting dates or resolving periods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmartDateError {
    /// A `YYYY-MM-DD` string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A year/month shift landed on a day that does not exist.
    #[error("it is not possible to create date {year}-{month}-{day}")]
    InvalidDate { year: i64, month: u8, day: u8 },

    /// A day shift left the representable calendar.
    #[error("shifting {date} by {days} days leaves the supported calendar range")]
    OutOfRange { date: CalendarDate, days: i64 },

    #[error("{0} smart date is not available")]
    UnknownPeriod(String),

    #[error("{0} comparison is not available")]
    UnknownComparison(String),

    /// Input that is neither a period tag nor an explicit `(start, end)` pair.
    #[error("malformed date query: {0}")]
    MalformedInput(String),

    /// The `(current, comparison)` pair has no entry in the comparison table.
    #[error("comparison {comparison} is not supported for {current}")]
    UnsupportedComparison { current: String, comparison: String },
}

impl From<RangeError> for SmartDateError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::ParseError(e) => Self::Parse(e),
            other => Self::MalformedInput(other.to_string()),
        }
    }
}

pub type Result<T, E = SmartDateError> = std::result::Result<T, E>;
