//! Calendar month keys and date parsing
//!
//! A month key (`YYYY-MM`) groups expenses and budgets by calendar month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};

/// Format used for stored and user-supplied dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            input
        ))
    })
}

/// Today's date on the host clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Identifies one calendar month, displayed as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month (1-12) and year (1-9999)
    pub fn new(year: i32, month: u32) -> TrackerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::Validation(format!(
                "Month must be 1-12, got {}",
                month
            )));
        }
        if !(1..=9999).contains(&year) {
            return Err(TrackerError::Validation(format!(
                "Year must be 1-9999, got {}",
                year
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Derive the month key from a `YYYY-MM-DD` string
    pub fn from_date_str(date: &str) -> TrackerResult<Self> {
        parse_date(date).map(Self::from_date)
    }

    /// The month containing today's date
    pub fn current() -> Self {
        Self::from_date(today())
    }

    /// Resolve optional month/year inputs, defaulting each to the current one
    pub fn resolve(month: Option<u32>, year: Option<i32>) -> TrackerResult<Self> {
        let current = Self::current();
        Self::new(
            year.unwrap_or(current.year),
            month.unwrap_or(current.month),
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// English month name, e.g. "October"
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
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
        NAMES[(self.month as usize - 1) % 12]
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || TrackerError::Validation(format!("Invalid month '{}', expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
