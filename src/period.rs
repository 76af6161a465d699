//! First (and last) days of the calendar period enclosing a date.
//!
//! Weeks start on Monday.

use chrono::{Datelike, Days, Months};

use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_QUARTER};
use crate::{CalendarDate, Result};

impl CalendarDate {
    /// January 1st of the same year.
    pub fn year_start(self) -> Self {
        Self(self.0 - Days::new(u64::from(self.0.ordinal0())))
    }

    /// First day of the quarter: 1 January, 1 April, 1 July or 1 October.
    pub fn quarter_start(self) -> Self {
        let months_into_quarter = self.0.month0() % u32::from(MONTHS_PER_QUARTER);
        Self(self.month_start().0 - Months::new(months_into_quarter))
    }

    /// First day of the same month.
    pub fn month_start(self) -> Self {
        Self(self.0 - Days::new(u64::from(self.0.day0())))
    }

    /// Monday of the same week. Total: 0001-01-01 is itself a Monday.
    pub fn week_start(self) -> Self {
        let since_monday = self.0.weekday().num_days_from_monday();
        Self(self.0 - Days::new(u64::from(since_monday)))
    }

    /// Sunday closing the same week.
    ///
    /// # Errors
    /// Returns [`crate::SmartDateError::OutOfRange`] in the last days of
    /// year 9999, whose week ends in year 10000.
    pub fn week_end(self) -> Result<Self> {
        self.week_start().add_days(DAYS_PER_WEEK - 1)
    }
}

/// # Errors
/// Returns [`crate::SmartDateError::Parse`] for a malformed `date`.
pub fn get_year_start(date: &str) -> Result<String> {
    Ok(date.parse::<CalendarDate>()?.year_start().to_string())
}

/// Start of the quarter containing `date`.
///
/// # Errors
/// Returns [`crate::SmartDateError::Parse`] for a malformed `date`.
pub fn get_quarter_start(date: &str) -> Result<String> {
    Ok(date.parse::<CalendarDate>()?.quarter_start().to_string())
}

/// # Errors
/// Returns [`crate::SmartDateError::Parse`] for a malformed `date`.
pub fn get_month_start(date: &str) -> Result<String> {
    Ok(date.parse::<CalendarDate>()?.month_start().to_string())
}

/// Monday of the week containing `date`.
///
/// # Errors
/// Returns [`crate::SmartDateError::Parse`] for a malformed `date`.
pub fn get_week_start(date: &str) -> Result<String> {
    Ok(date.parse::<CalendarDate>()?.week_start().to_string())
}

/// Sunday of the week containing `date`.
///
/// # Errors
/// Returns [`crate::SmartDateError::Parse`] for a malformed `date`, or
/// [`crate::SmartDateError::OutOfRange`] when that Sunday is past 9999-12-31.
pub fn get_week_end(date: &str) -> Result<String> {
    Ok(date.parse::<CalendarDate>()?.week_end()?.to_string())
}
