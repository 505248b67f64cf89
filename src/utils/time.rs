//! Time utilities: parsing HH:MM, adding slot durations, 12-hour display.

use crate::config::defaults::{DISPLAY_TIME_FORMAT, INPUT_TIME_FORMAT};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta, Timelike};

const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, INPUT_TIME_FORMAT).ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// `08:15 AM` style rendering.
pub fn format_12h(t: NaiveTime) -> String {
    t.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Adds `minutes` to a time of day. Results past midnight wrap around.
pub fn add_minutes(t: NaiveTime, minutes: i64) -> NaiveTime {
    let delta = TimeDelta::minutes(minutes.rem_euclid(MINUTES_PER_DAY));
    t.overflowing_add_signed(delta).0
}

/// Minutes since midnight, without wrapping, for ordering comparisons.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// `"<start> - <end>"` in 12-hour form for a slot starting at `start`.
pub fn format_range(start: NaiveTime, minutes: i64) -> String {
    format!(
        "{} - {}",
        format_12h(start),
        format_12h(add_minutes(start, minutes))
    )
}
