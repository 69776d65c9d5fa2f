//! Pure UTC calendar logic.
//!
//! Two pieces, both deterministic functions of their inputs:
//!
//! - [`resolve`]: turn a human-selected [`Period`] and the current UTC date
//!   into a concrete inclusive [`DateRange`].
//! - [`weekly_windows`]: expand a [`DateRange`] into the Sunday-aligned
//!   7-day [`WeeklyWindow`]s the upstream API accepts.

mod period;
mod window;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::LevyError;

pub use period::{Period, resolve};
pub use window::{WeeklyWindow, weekly_windows};

/// An inclusive pair of UTC calendar dates.
///
/// Ranges produced by [`resolve`] normally satisfy `from <= to`. On the
/// first day of a week or month the current-week/current-month rules yield a
/// degenerate range (`from` after `to`, since "to" is always yesterday);
/// downstream stages handle that by producing fewer covering windows,
/// possibly none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub from: NaiveDate,
    /// Last day of the range (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `from > to`.
    ///
    /// Use this for caller-supplied ranges; [`resolve`] constructs its
    /// (occasionally degenerate) ranges directly.
    ///
    /// # Errors
    /// Returns `LevyError::InvalidArg` when `from` is after `to`.
    pub fn try_new(from: NaiveDate, to: NaiveDate) -> Result<Self, LevyError> {
        if from > to {
            return Err(LevyError::InvalidArg(format!(
                "date range start {from} is after end {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// Whether the range contains no days (`from > to`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}
