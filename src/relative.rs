//! Comparison ranges: "previous period", "same period last year", and so on.
//!
//! Which comparisons a period supports, and how the comparison range is
//! derived from the current one, is a single lookup table.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateDelta, DateRange, PeriodTag, Result, SmartDateError, resolve_today};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonTag {
    PreviousPeriod,
    SamePeriodLastMonth,
    SamePeriodLastQuarter,
    SamePeriodLastYear,
}

impl ComparisonTag {
    pub const ALL: [Self; 4] = [
        Self::PreviousPeriod,
        Self::SamePeriodLastMonth,
        Self::SamePeriodLastQuarter,
        Self::SamePeriodLastYear,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreviousPeriod => "previous_period",
            Self::SamePeriodLastMonth => "same_period_last_month",
            Self::SamePeriodLastQuarter => "same_period_last_quarter",
            Self::SamePeriodLastYear => "same_period_last_year",
        }
    }
}

impl fmt::Display for ComparisonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonTag {
    type Err = SmartDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| SmartDateError::UnknownComparison(s.to_owned()))
    }
}

/// How a comparison range is derived from the current range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Move both bounds by the same calendar offset.
    Calendar(DateDelta),
    /// The whole quarter ending the day before the current range starts.
    PreviousQuarter,
}

impl Shift {
    /// # Errors
    /// Returns [`SmartDateError::InvalidDate`] when a calendar shift moves a
    /// bound onto a day its target month does not have, or
    /// [`SmartDateError::OutOfRange`] at the edges of the calendar.
    pub fn apply(self, current: DateRange) -> Result<DateRange> {
        match self {
            Self::Calendar(delta) => current.try_map(|date| date.shift(delta)),
            Self::PreviousQuarter => {
                let end = current.start().add_days(-1)?;
                Ok(DateRange::new(end.quarter_start(), end))
            },
        }
    }
}

const WEEK_BACK: Shift = Shift::Calendar(DateDelta::days(-7));
const MONTH_BACK: Shift = Shift::Calendar(DateDelta::months(-1));
const QUARTER_BACK: Shift = Shift::Calendar(DateDelta::months(-3));
const YEAR_BACK: Shift = Shift::Calendar(DateDelta::years(-1));

/// Every supported `(period, comparison)` combination; anything else is rejected.
static COMPARISONS: [(PeriodTag, ComparisonTag, Shift); 16] = {
    use ComparisonTag::{PreviousPeriod, SamePeriodLastQuarter, SamePeriodLastYear};
    use PeriodTag::{
        Last7Days, Last14Days, Last30Days, LastMonth, LastQuarter, LastWeek, LastYear, ThisMonth,
        ThisQuarter, ThisWeek, ThisYear,
    };

    [
        (ThisWeek, PreviousPeriod, WEEK_BACK),
        (LastWeek, PreviousPeriod, WEEK_BACK),
        (Last7Days, PreviousPeriod, WEEK_BACK),
        (Last14Days, PreviousPeriod, Shift::Calendar(DateDelta::days(-14))),
        (Last30Days, PreviousPeriod, Shift::Calendar(DateDelta::days(-30))),
        (ThisMonth, PreviousPeriod, MONTH_BACK),
        (ThisMonth, SamePeriodLastYear, YEAR_BACK),
        (LastMonth, PreviousPeriod, MONTH_BACK),
        (LastMonth, SamePeriodLastQuarter, QUARTER_BACK),
        (LastMonth, SamePeriodLastYear, YEAR_BACK),
        (ThisQuarter, PreviousPeriod, QUARTER_BACK),
        (ThisQuarter, SamePeriodLastYear, YEAR_BACK),
        (LastQuarter, PreviousPeriod, Shift::PreviousQuarter),
        (LastQuarter, SamePeriodLastYear, YEAR_BACK),
        (ThisYear, PreviousPeriod, YEAR_BACK),
        (LastYear, PreviousPeriod, YEAR_BACK),
    ]
};

/// Looks up how `comparison` is derived for `current`, if at all.
pub fn comparison_shift(current: PeriodTag, comparison: ComparisonTag) -> Option<Shift> {
    let shift = COMPARISONS
        .iter()
        .find(|(period, tag, _)| *period == current && *tag == comparison)
        .map(|&(_, _, shift)| shift);
    trace!("comparison lookup {current}/{comparison}: {shift:?}");
    shift
}

/// The comparisons `period` supports, in table order.
pub fn supported_comparisons(period: PeriodTag) -> impl Iterator<Item = ComparisonTag> {
    COMPARISONS
        .iter()
        .filter(move |(p, _, _)| *p == period)
        .map(|&(_, tag, _)| tag)
}

/// Resolves `current` on `today` together with its `comparison` range.
///
/// # Errors
/// Returns [`SmartDateError::UnsupportedComparison`] for a combination that
/// is not in the table, and otherwise the errors of [`PeriodTag::resolve`]
/// and [`Shift::apply`].
pub fn resolve_relative(
    current: PeriodTag,
    comparison: ComparisonTag,
    today: CalendarDate,
) -> Result<(DateRange, DateRange)> {
    let shift = comparison_shift(current, comparison).ok_or_else(|| {
        SmartDateError::UnsupportedComparison {
            current:    current.to_string(),
            comparison: comparison.to_string(),
        }
    })?;
    let current_range = current.resolve(today)?;
    let previous_range = shift.apply(current_range)?;
    debug!("{current} vs {comparison} on {today}: {current_range} against {previous_range}");
    Ok((current_range, previous_range))
}

/// String form of [`resolve_relative`]: returns `((start, end), (start, end))`
/// for the current and the comparison range.
///
/// `today` defaults to the local date at call time. Names outside the known
/// period and comparison sets are reported as an unsupported combination.
///
/// # Errors
/// See [`resolve_relative`]; a malformed `today` yields [`SmartDateError::Parse`].
///
/// # Examples
///
/// ```
/// use smart_dates::parse_relative_dates;
///
/// let (current, previous) =
///     parse_relative_dates("this_week", "previous_period", Some("2018-03-28")).unwrap();
/// assert_eq!(current, ("2018-03-26".to_owned(), "2018-03-27".to_owned()));
/// assert_eq!(previous, ("2018-03-19".to_owned(), "2018-03-20".to_owned()));
/// ```
pub fn parse_relative_dates(
    current: &str,
    previous: &str,
    today: Option<&str>,
) -> Result<((String, String), (String, String))> {
    let unsupported = || SmartDateError::UnsupportedComparison {
        current:    current.to_owned(),
        comparison: previous.to_owned(),
    };
    let current_tag: PeriodTag = current.parse().map_err(|_| unsupported())?;
    let comparison: ComparisonTag = previous.parse().map_err(|_| unsupported())?;
    if comparison_shift(current_tag, comparison).is_none() {
        return Err(unsupported());
    }

    let (current_range, previous_range) =
        resolve_relative(current_tag, comparison, resolve_today(today)?)?;
    Ok((current_range.to_strings(), previous_range.to_strings()))
}
