//! Calendar constants and text separators.

/// Earliest supported year
pub const MIN_YEAR: u16 = 1;
/// Latest supported year, the largest a `YYYY` field can hold
pub const MAX_YEAR: u16 = 9999;

pub const MAX_MONTH: u8 = 12;
/// Used to carry month offsets into years
pub const MONTHS_PER_YEAR: i64 = 12;
pub const MONTHS_PER_QUARTER: u8 = 3;
pub const DAYS_PER_WEEK: i64 = 7;

pub const FEBRUARY: u8 = 2;
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths in a common year, indexed by 1-based month number.
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separates the fields of `YYYY-MM-DD`
pub const DATE_SEPARATOR: char = '-';
/// Separates the bounds of a textual `start/end` range
pub const RANGE_SEPARATOR: char = '/';

/// Digits in each `YYYY-MM-DD` field, in order
pub(crate) const DATE_FIELD_WIDTHS: [usize; 3] = [4, 2, 2];
