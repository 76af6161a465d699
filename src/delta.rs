//! Calendar arithmetic: shifting a date by years, months and days.
//!
//! Year and month offsets are applied first and keep the day-of-month
//! unchanged, so they fail with [`SmartDateError::InvalidDate`] when that day
//! does not exist in the target month (`2018-03-31` minus one month). The
//! day offset is applied afterwards as a plain day count and never hits that
//! failure.

use chrono::Days;

use crate::consts::MONTHS_PER_YEAR;
use crate::{CalendarDate, Result, SmartDateError, Year};

/// Signed calendar offsets, applied as years/months first, then days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateDelta {
    pub years:  i64,
    pub months: i64,
    pub days:   i64,
}

impl DateDelta {
    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub const fn years(years: i64) -> Self {
        Self::new(years, 0, 0)
    }

    pub const fn months(months: i64) -> Self {
        Self::new(0, months, 0)
    }

    pub const fn days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

impl CalendarDate {
    /// Applies `delta` to this date.
    ///
    /// # Errors
    /// Returns [`SmartDateError::InvalidDate`] if the year/month shift lands on
    /// a nonexistent day or outside years 1..=9999, and
    /// [`SmartDateError::OutOfRange`] if the day shift leaves the calendar.
    pub fn shift(self, delta: DateDelta) -> Result<Self> {
        let moved = if delta.years == 0 && delta.months == 0 {
            self
        } else {
            self.shift_months(delta.years, delta.months)?
        };
        moved.add_days(delta.days)
    }

    /// Moves the date by a signed number of days.
    ///
    /// # Errors
    /// Returns [`SmartDateError::OutOfRange`] if the result falls outside
    /// `0001-01-01..=9999-12-31`.
    pub fn add_days(self, days: i64) -> Result<Self> {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.as_naive().checked_add_days(step)
        } else {
            self.as_naive().checked_sub_days(step)
        };
        shifted
            .and_then(|date| Self::try_from(date).ok())
            .ok_or(SmartDateError::OutOfRange { date: self, days })
    }

    fn shift_months(self, years: i64, months: i64) -> Result<Self> {
        // Zero-based month index, carried into whole years with Euclidean division
        let month_index = i64::from(self.month() - 1).saturating_add(months);
        let year = i64::from(self.year())
            .saturating_add(years)
            .saturating_add(month_index.div_euclid(MONTHS_PER_YEAR));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = month_index.rem_euclid(MONTHS_PER_YEAR) as u8 + 1;
        let day = self.day();

        Year::from_signed(year)
            .and_then(|y| Self::from_ymd(y.get(), month, day).ok())
            .ok_or(SmartDateError::InvalidDate { year, month, day })
    }
}

/// Returns `date` shifted by the given years, days and months, as `YYYY-MM-DD`.
///
/// # Errors
/// Returns [`SmartDateError::Parse`] for a malformed `date`, otherwise the
/// errors of [`CalendarDate::shift`].
///
/// # Examples
///
/// ```
/// use smart_dates::{SmartDateError, delta_date};
///
/// assert_eq!(delta_date("2018-03-30", 0, 6, 0).unwrap(), "2018-04-05");
/// assert!(matches!(
///     delta_date("2018-03-31", 0, 0, -1),
///     Err(SmartDateError::InvalidDate { year: 2018, month: 2, day: 31 })
/// ));
/// ```
pub fn delta_date(date: &str, years: i64, days: i64, months: i64) -> Result<String> {
    let date: CalendarDate = date.parse()?;
    let shifted = date.shift(DateDelta::new(years, months, days))?;
    log::trace!("{date} shifted by {years}y {months}m {days}d is {shifted}");
    Ok(shifted.to_string())
}
