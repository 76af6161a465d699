//! Validated date components.
//!
//! `CalendarDate` is only ever built from these, so an out-of-range field is
//! reported with the component that failed.

use std::num::{NonZeroU8, NonZeroU16};

use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_YEAR,
};

/// Calendar year in `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// `ParseError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&value) => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    /// Converts the result of signed year arithmetic, `None` when it falls
    /// outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_signed(value: i64) -> Option<Self> {
        u16::try_from(value).ok().and_then(|v| Self::new(v).ok())
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// Month number, 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// `ParseError::InvalidMonth` for 0 or anything past `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in `year`.
    pub const fn len_in(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// Day of month, checked against the month it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// `ParseError::InvalidDay` for 0 or a day past the end of `month` in `year`.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(day) if value <= month.len_in(year) => Ok(Self(day)),
            _ => Err(ParseError::InvalidDay {
                year:  year.get(),
                month: month.get(),
                day:   value,
            }),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// Gregorian leap rule: every fourth year, except centuries not divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
}

/// Length of `month` (1-based) in `year`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        _ => DAYS_IN_MONTH[month as usize],
    }
}
