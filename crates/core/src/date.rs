// SPDX-License-Identifier: MIT

//!
//! Calendar primitives: signed years and exact calendar dates
//!

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The minimum year of a [`CalendarDate`]
pub const MIN_YEAR: i64 = -50000;

/// The maximum year of a [`CalendarDate`]
pub const MAX_YEAR: i64 = 10000;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors that can arise in relation to a [`Year`] or [`CalendarDate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is out of range (an `i32` for a [`Year`], [`MIN_YEAR`] <=
    /// year <= [`MAX_YEAR`] for a [`CalendarDate`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// Each field is fine on its own but the day doesn't exist in that month
    #[error("{day}/{month}/{year} is not a calendar date")]
    InvalidDate { day: i64, month: i64, year: i64 },

    /// The string isn't an ISO `YYYY-MM-DD` date
    #[error("`{0}` is not a YYYY-MM-DD date")]
    Parse(String),
}

/// A day of the month, as read from a [`CalendarDate`]
#[derive(derive_more::Display, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// A month of the year (January is 1), as read from a [`CalendarDate`]
#[derive(derive_more::Display, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// A signed year number
///
/// Zero and positive years are AD, negative years are BC (`-1` is 1 BC).  Any
/// `i32` is a valid year: estimates can reach far into prehistory.  Only a
/// [`CalendarDate`] is limited to [`MIN_YEAR`]..=[`MAX_YEAR`].
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The English name of the month, e.g. "October"
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.0 - 1)]
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Number of years away from year zero, ignoring the era
    pub fn magnitude(&self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Whether the year falls before the common era
    pub fn is_bc(&self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year(value)
    }
}

/// Fails only if the value doesn't fit in an `i32`
impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(Year)
            .map_err(|_| DateError::InvalidYear(value))
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Check a year can be used in a [`CalendarDate`]
fn check_calendar_year(year: i64) -> Result<(), DateError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(DateError::InvalidYear(year))
    }
}

/// An exact calendar date (proleptic Gregorian)
///
/// Unlike an estimate, all three of day, month and year are always set.  BC
/// dates use negative years.  Time of day and timezones are not represented.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a new [`CalendarDate`] if the result will be valid
    pub fn from(day: i64, month: i64, year: i64) -> Result<CalendarDate, DateError> {
        if !(1..=31).contains(&day) {
            return Err(DateError::InvalidDay(day));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        check_calendar_year(year)?;
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .map(CalendarDate)
            .ok_or(DateError::InvalidDate { day, month, year })
    }

    /// Get the date's day of the month
    pub fn day(&self) -> Day {
        Day(self.0.day() as u8)
    }

    /// Get the date's month
    pub fn month(&self) -> Month {
        Month(self.0.month() as u8)
    }

    /// Get the date's year
    pub fn year(&self) -> Year {
        Year(self.0.year())
    }

    /// Whether both dates fall on the same calendar day
    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        (self.year(), self.month(), self.day()) == (other.year(), other.month(), other.day())
    }

    /// The date `days` days later, if it's still within [`MAX_YEAR`]
    pub fn succ_days(&self, days: u64) -> Option<CalendarDate> {
        let next = self.0.checked_add_days(Days::new(days))?;
        check_calendar_year(i64::from(next.year())).ok()?;
        Some(CalendarDate(next))
    }

    /// e.g. 14 October 1066 format (see [`crate::format_date`])
    pub fn as_long_date_format(&self) -> String {
        crate::format_date(Some(self))
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        check_calendar_year(i64::from(date.year()))?;
        Ok(CalendarDate(date))
    }
}

/// ISO `YYYY-MM-DD`, with a sign on years outside 0..=9999 (e.g. `-0320-03-15`)
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parse `YYYY-MM-DD`.  Anything from a `T` onwards (the time of day) is
    /// ignored, so full timestamps are accepted too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        let naive = NaiveDate::from_str(date_part).map_err(|_| DateError::Parse(s.to_string()))?;
        CalendarDate::try_from(naive)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(serde::de::Error::custom)
    }
}
