//! Named reporting periods and their resolution against a reference day.
//!
//! "Today" is treated as incomplete, so every rolling `this_*` / `last_N_days`
//! window ends yesterday.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;
use crate::{CalendarDate, DateRange, RANGE_SEPARATOR, Result, SmartDateError, resolve_today};

/// The closed set of period names understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodTag {
    Yesterday,
    ThisWeek,
    LastWeek,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_14_days")]
    Last14Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
}

impl PeriodTag {
    pub const ALL: [Self; 12] = [
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::Last7Days,
        Self::Last14Days,
        Self::Last30Days,
        Self::ThisMonth,
        Self::LastMonth,
        Self::ThisQuarter,
        Self::LastQuarter,
        Self::ThisYear,
        Self::LastYear,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this_week",
            Self::LastWeek => "last_week",
            Self::Last7Days => "last_7_days",
            Self::Last14Days => "last_14_days",
            Self::Last30Days => "last_30_days",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::ThisQuarter => "this_quarter",
            Self::LastQuarter => "last_quarter",
            Self::ThisYear => "this_year",
            Self::LastYear => "last_year",
        }
    }

    /// Concrete inclusive range of this period as seen on `today`.
    ///
    /// # Errors
    /// Returns [`SmartDateError::OutOfRange`] when the period would start
    /// before 0001-01-01 (only possible for `today` in the first weeks of
    /// year 1).
    pub fn resolve(self, today: CalendarDate) -> Result<DateRange> {
        let yesterday = today.add_days(-1)?;
        let trailing = |days: i64| -> Result<DateRange> {
            Ok(DateRange::new(today.add_days(-days)?, yesterday))
        };

        let range = match self {
            Self::Yesterday => DateRange::new(yesterday, yesterday),
            Self::ThisWeek => DateRange::new(today.week_start(), yesterday),
            Self::LastWeek => {
                let start = today.add_days(-DAYS_PER_WEEK)?.week_start();
                DateRange::new(start, start.week_end()?)
            },
            Self::Last7Days => trailing(7)?,
            Self::Last14Days => trailing(14)?,
            Self::Last30Days => trailing(30)?,
            Self::ThisMonth => DateRange::new(today.month_start(), yesterday),
            Self::LastMonth => {
                let end = today.month_start().add_days(-1)?;
                DateRange::new(end.month_start(), end)
            },
            Self::ThisQuarter => DateRange::new(today.quarter_start(), yesterday),
            Self::LastQuarter => {
                let end = today.quarter_start().add_days(-1)?;
                DateRange::new(end.quarter_start(), end)
            },
            Self::ThisYear => DateRange::new(today.year_start(), yesterday),
            Self::LastYear => {
                let end = today.year_start().add_days(-1)?;
                DateRange::new(end.year_start(), end)
            },
        };
        debug!("{self} on {today} resolved to {range}");
        Ok(range)
    }
}

impl fmt::Display for PeriodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodTag {
    type Err = SmartDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| SmartDateError::UnknownPeriod(s.to_owned()))
    }
}

/// What a caller asks the resolver for: a named period, or an explicit range
/// that is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub enum Query {
    Explicit(DateRange),
    Named(PeriodTag),
}

impl Query {
    /// # Errors
    /// Propagates the errors of [`PeriodTag::resolve`]; explicit ranges never fail.
    pub fn resolve(self, today: CalendarDate) -> Result<DateRange> {
        match self {
            Self::Explicit(range) => Ok(range),
            Self::Named(tag) => tag.resolve(today),
        }
    }

    /// Builds a query from loose parts: one part names a period, two parts
    /// are the bounds of an explicit range.
    ///
    /// # Errors
    /// Returns [`SmartDateError::MalformedInput`] for any other part count,
    /// [`SmartDateError::UnknownPeriod`] or [`SmartDateError::Parse`] for bad parts.
    pub fn from_parts(parts: &[&str]) -> Result<Self> {
        match parts {
            [tag] => Ok(Self::Named(tag.parse()?)),
            [start, end] => Ok(Self::Explicit(DateRange::new(start.parse()?, end.parse()?))),
            _ => Err(SmartDateError::MalformedInput(format!(
                "expected a period name or a (start, end) pair, got {} parts",
                parts.len()
            ))),
        }
    }
}

impl FromStr for Query {
    type Err = SmartDateError;

    /// `start/end` is an explicit range; anything else must be a period name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(RANGE_SEPARATOR) {
            Ok(Self::Explicit(s.parse()?))
        } else {
            Ok(Self::Named(s.parse()?))
        }
    }
}

fn resolve_query(query: Query, today: Option<&str>) -> Result<(String, String)> {
    let range = match query {
        Query::Explicit(range) => range,
        Query::Named(tag) => tag.resolve(resolve_today(today)?)?,
    };
    Ok(range.to_strings())
}

/// Resolves a period name (or a `start/end` range) to `(start, end)` strings.
///
/// `today` defaults to the local date at call time.
///
/// # Errors
/// Returns [`SmartDateError::UnknownPeriod`] for an unrecognized name,
/// [`SmartDateError::MalformedInput`] for a badly shaped range, and
/// [`SmartDateError::Parse`] for malformed dates.
///
/// # Examples
///
/// ```
/// use smart_dates::parse_query_dates;
///
/// let (start, end) = parse_query_dates("last_quarter", Some("2018-03-28")).unwrap();
/// assert_eq!((start.as_str(), end.as_str()), ("2017-10-01", "2017-12-31"));
/// ```
pub fn parse_query_dates(query: &str, today: Option<&str>) -> Result<(String, String)> {
    resolve_query(query.parse()?, today)
}

/// Like [`parse_query_dates`], taking the query as separate parts: a single
/// period name, or the two bounds of an explicit range.
///
/// # Errors
/// See [`Query::from_parts`] and [`parse_query_dates`].
pub fn parse_query_parts(parts: &[&str], today: Option<&str>) -> Result<(String, String)> {
    resolve_query(Query::from_parts(parts)?, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, pair, range};

    const TODAY: Option<&str> = Some("2018-03-28");

    #[test]
    fn test_resolve_named_periods() {
        let cases = [
            ("yesterday", ("2018-03-27", "2018-03-27")),
            ("this_week", ("2018-03-26", "2018-03-27")),
            ("last_week", ("2018-03-19", "2018-03-25")),
            ("last_7_days", ("2018-03-21", "2018-03-27")),
            ("last_14_days", ("2018-03-14", "2018-03-27")),
            ("last_30_days", ("2018-02-26", "2018-03-27")),
            ("this_month", ("2018-03-01", "2018-03-27")),
            ("last_month", ("2018-02-01", "2018-02-28")),
            ("this_quarter", ("2018-01-01", "2018-03-27")),
            ("last_quarter", ("2017-10-01", "2017-12-31")),
            ("this_year", ("2018-01-01", "2018-03-27")),
            ("last_year", ("2017-01-01", "2017-12-31")),
        ];
        for (tag, (start, end)) in cases {
            assert_eq!(parse_query_dates(tag, TODAY).unwrap(), pair(start, end), "{tag}");
        }
    }

    #[test]
    fn test_last_month_in_leap_year() {
        assert_eq!(
            parse_query_dates("last_month", Some("2016-03-02")).unwrap(),
            pair("2016-02-01", "2016-02-29")
        );
    }

    #[test]
    fn test_periods_across_year_boundary() {
        let today = Some("2018-01-01");
        assert_eq!(
            parse_query_dates("last_month", today).unwrap(),
            pair("2017-12-01", "2017-12-31")
        );
        assert_eq!(
            parse_query_dates("last_quarter", today).unwrap(),
            pair("2017-10-01", "2017-12-31")
        );
        assert_eq!(
            parse_query_dates("this_week", today).unwrap(),
            pair("2018-01-01", "2017-12-31")
        );
    }

    #[test]
    fn test_last_week_on_monday_and_sunday() {
        assert_eq!(
            parse_query_dates("last_week", Some("2018-03-26")).unwrap(),
            pair("2018-03-19", "2018-03-25")
        );
        assert_eq!(
            parse_query_dates("last_week", Some("2018-03-25")).unwrap(),
            pair("2018-03-12", "2018-03-18")
        );
    }

    #[test]
    fn test_explicit_range_passes_through() {
        assert_eq!(
            parse_query_dates("2017-10-28/2018-02-22", TODAY).unwrap(),
            pair("2017-10-28", "2018-02-22")
        );
        assert_eq!(
            parse_query_parts(&["2017-10-28", "2018-02-22"], TODAY).unwrap(),
            pair("2017-10-28", "2018-02-22")
        );
        // ordering is not enforced, and today is not consulted
        assert_eq!(
            parse_query_parts(&["2018-02-22", "2017-10-28"], Some("not a date")).unwrap(),
            pair("2018-02-22", "2017-10-28")
        );
    }

    #[test]
    fn test_unknown_period() {
        assert_eq!(
            parse_query_dates("bogus_tag", Some("2020-01-01")),
            Err(SmartDateError::UnknownPeriod("bogus_tag".to_owned()))
        );
        assert!(matches!(
            parse_query_parts(&["Last_Month"], TODAY),
            Err(SmartDateError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_malformed_input() {
        for parts in [&[][..], &["2018-01-01", "2018-01-02", "2018-01-03"][..]] {
            assert!(matches!(
                parse_query_parts(parts, TODAY),
                Err(SmartDateError::MalformedInput(_))
            ));
        }
        assert!(matches!(
            parse_query_dates("2018-01-01/2018-01-02/2018-01-03", TODAY),
            Err(SmartDateError::MalformedInput(_))
        ));
        assert!(matches!(
            parse_query_dates("2018-01-01/2018-13-02", TODAY),
            Err(SmartDateError::Parse(_))
        ));
    }

    #[test]
    fn test_bad_today() {
        assert!(matches!(
            parse_query_dates("last_month", Some("2018-02-30")),
            Err(SmartDateError::Parse(_))
        ));
    }

    #[test]
    fn test_wall_clock_default() {
        let today = CalendarDate::today().unwrap();
        let expected = PeriodTag::Yesterday.resolve(today).unwrap().to_strings();
        // a midnight rollover between the two reads is the only way these differ
        let resolved = parse_query_dates("yesterday", None).unwrap();
        assert!(resolved == expected || resolved.0 > expected.0);
    }

    #[test]
    fn test_tag_strings_round_trip() {
        for tag in PeriodTag::ALL {
            assert_eq!(tag.as_str().parse::<PeriodTag>().unwrap(), tag);
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{tag}\""));
            assert_eq!(serde_json::from_str::<PeriodTag>(&json).unwrap(), tag);
        }
    }

    #[test]
    fn test_query_conversions() {
        assert_eq!(Query::from(PeriodTag::LastMonth), Query::Named(PeriodTag::LastMonth));
        let r = range("2018-01-01", "2018-01-31");
        assert_eq!(Query::from(r).resolve(date("1999-01-01")).unwrap(), r);
        assert_eq!("this_year".parse::<Query>().unwrap(), Query::Named(PeriodTag::ThisYear));
    }

    #[test]
    fn test_resolve_at_start_of_calendar() {
        assert!(matches!(
            PeriodTag::Last30Days.resolve(date("0001-01-10")),
            Err(SmartDateError::OutOfRange { .. })
        ));
        assert_eq!(
            PeriodTag::ThisMonth.resolve(date("0001-01-10")).unwrap(),
            range("0001-01-01", "0001-01-09")
        );
    }

    #[test]
    fn test_named_ranges_end_before_today() {
        let today = date("2018-03-28");
        for tag in PeriodTag::ALL {
            let r = tag.resolve(today).unwrap();
            assert!(r.is_ordered(), "{tag}: {r}");
            assert!(r.end() < today, "{tag}: {r}");
        }
    }
}
