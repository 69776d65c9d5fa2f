use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DateRange;

/// A fixed Sunday-to-Saturday 7-day bucket, the only query granularity the
/// upstream contribution API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyWindow {
    start: NaiveDate,
}

impl WeeklyWindow {
    /// Window beginning on `start`. Windows produced by [`weekly_windows`]
    /// always start on a Sunday; records stamped from upstream data inherit
    /// whatever date the provider reported.
    #[must_use]
    pub const fn starting(start: NaiveDate) -> Self {
        Self { start }
    }

    /// First day of the window (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive): `start + 6` days.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(self.start)
    }

    /// Standard inclusive interval overlap against a [`DateRange`]:
    /// `start <= range.to && range.from <= end`.
    #[must_use]
    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.start <= range.to && range.from <= self.end()
    }
}

/// The Sunday on or before `date` (UTC).
pub(crate) fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_signed(Duration::days(back)).unwrap_or(date)
}

/// The Saturday on or after `date` (UTC).
fn saturday_on_or_after(date: NaiveDate) -> NaiveDate {
    let fwd = 6 - i64::from(date.weekday().num_days_from_sunday());
    date.checked_add_signed(Duration::days(fwd)).unwrap_or(date)
}

/// Expand a range into the ordered, non-overlapping sequence of weekly
/// windows whose union covers it.
///
/// `range.from` snaps backward to the preceding (or same) Sunday and
/// `range.to` snaps forward to the following (or same) Saturday; consecutive
/// 7-day windows are emitted between the two. Any `from <= to` range
/// produces at least one window. A degenerate range (see [`DateRange`])
/// whose endpoints fall in the same week still yields that week; one whose
/// snapped start passes its snapped end yields none.
///
/// ```
/// use chrono::NaiveDate;
/// use levy_core::calendar::{DateRange, weekly_windows};
///
/// let range = DateRange::try_new(
///     NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
/// )
/// .unwrap();
/// let windows = weekly_windows(&range);
/// assert_eq!(windows.len(), 2);
/// assert_eq!(windows[0].start(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
/// assert_eq!(windows[1].end(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
/// ```
#[must_use]
pub fn weekly_windows(range: &DateRange) -> Vec<WeeklyWindow> {
    let first = sunday_on_or_before(range.from);
    let last = saturday_on_or_after(range.to);

    let mut out = Vec::new();
    let mut cur = first;
    while cur <= last {
        out.push(WeeklyWindow::starting(cur));
        match cur.checked_add_signed(Duration::days(7)) {
            Some(next) => cur = next,
            None => break,
        }
    }
    out
}
