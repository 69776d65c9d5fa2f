use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DateRange;
use super::window::sunday_on_or_before;

/// Number of trailing days used when a custom-days selection is missing or
/// not a positive count.
const CUSTOM_DAYS_FALLBACK: u32 = 7;

/// A human-selected reporting period.
///
/// Every variant resolves against the current UTC date; the resolved range
/// never includes the current (possibly incomplete) day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    /// Most recent Sunday through yesterday.
    CurrentWeek,
    /// The previous full Sunday–Saturday week.
    LastWeek,
    /// The 14 days ending yesterday.
    #[serde(rename = "last2Weeks")]
    LastTwoWeeks,
    /// The 21 days ending yesterday.
    #[serde(rename = "last3Weeks")]
    LastThreeWeeks,
    /// First day of the current month through yesterday.
    CurrentMonth,
    /// The previous full calendar month.
    LastMonth,
    /// A trailing window of this many days, ending yesterday.
    CustomDays(u32),
}

impl Period {
    /// Parse a caller-facing tag plus optional custom-days count.
    ///
    /// This is deliberately permissive, matching the behavior callers
    /// depend on: an unrecognized tag resolves as [`Period::CurrentWeek`]
    /// and a missing or non-positive `custom_days` as a 7-day trailing
    /// window. Both fallbacks are logged at WARN.
    #[must_use]
    pub fn from_tag(tag: &str, custom_days: Option<u32>) -> Self {
        match tag {
            "currentWeek" => Self::CurrentWeek,
            "lastWeek" => Self::LastWeek,
            "last2Weeks" => Self::LastTwoWeeks,
            "last3Weeks" => Self::LastThreeWeeks,
            "currentMonth" => Self::CurrentMonth,
            "lastMonth" => Self::LastMonth,
            "customDays" => match custom_days {
                Some(n) if n > 0 => Self::CustomDays(n),
                other => {
                    tracing::warn!(
                        custom_days = ?other,
                        "customDays period without a positive day count; using {} days",
                        CUSTOM_DAYS_FALLBACK
                    );
                    Self::CustomDays(CUSTOM_DAYS_FALLBACK)
                }
            },
            other => {
                tracing::warn!(tag = other, "unrecognized period tag; using currentWeek");
                Self::CurrentWeek
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentWeek => f.write_str("currentWeek"),
            Self::LastWeek => f.write_str("lastWeek"),
            Self::LastTwoWeeks => f.write_str("last2Weeks"),
            Self::LastThreeWeeks => f.write_str("last3Weeks"),
            Self::CurrentMonth => f.write_str("currentMonth"),
            Self::LastMonth => f.write_str("lastMonth"),
            Self::CustomDays(n) => write!(f, "customDays({n})"),
        }
    }
}

fn days_back(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days)).unwrap_or(date)
}

/// A trailing window of `days` days ending on `last`.
fn trailing(last: NaiveDate, days: u32) -> DateRange {
    DateRange {
        from: days_back(last, i64::from(days) - 1),
        to: last,
    }
}

/// Resolve a period against `today` (the current UTC date) into a concrete
/// inclusive range.
///
/// Resolution is a pure function of `(period, today)`: two calls within the
/// same UTC day always agree. The range's `to` is yesterday for every
/// variant except [`Period::LastWeek`] and [`Period::LastMonth`], which
/// cover their previous full week/month.
#[must_use]
pub fn resolve(period: &Period, today: NaiveDate) -> DateRange {
    let yesterday = days_back(today, 1);

    match period {
        Period::CurrentWeek => DateRange {
            from: sunday_on_or_before(today),
            to: yesterday,
        },
        Period::LastWeek => {
            let from = days_back(sunday_on_or_before(today), 7);
            DateRange {
                from,
                to: from.checked_add_signed(Duration::days(6)).unwrap_or(from),
            }
        }
        Period::LastTwoWeeks => trailing(yesterday, 14),
        Period::LastThreeWeeks => trailing(yesterday, 21),
        Period::CurrentMonth => DateRange {
            from: today.with_day(1).unwrap_or(today),
            to: yesterday,
        },
        Period::LastMonth => {
            let first_of_month = today.with_day(1).unwrap_or(today);
            let to = days_back(first_of_month, 1);
            DateRange {
                from: to.with_day(1).unwrap_or(to),
                to,
            }
        }
        Period::CustomDays(n) => {
            let days = if *n > 0 {
                *n
            } else {
                tracing::warn!("customDays resolved with zero days; using {CUSTOM_DAYS_FALLBACK}");
                CUSTOM_DAYS_FALLBACK
            };
            trailing(yesterday, days)
        }
    }
}
