#![allow(dead_code)]

pub mod fn_provider;

use chrono::NaiveDate;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Fixed "today" used across aggregator tests: Thursday 2024-03-14.
pub fn today() -> NaiveDate {
    d(2024, 3, 14)
}
