//! Conversion and day arithmetic for the International Fixed Calendar (IFC).
//!
//! The IFC has 13 months of exactly 28 days. The remaining day of a common
//! year is Year Day (13-29); leap years add Leap Day (06-29). Neither belongs
//! to a week, so every ordinary date falls on the same weekday in every month.
//!
//! ```
//! use ifc_date::{IfcDate, IfcDay, IsoDate, Weekday};
//!
//! let iso: IsoDate = "2016-06-18".parse().unwrap();
//! let ifc = ifc_date::to_ifc(iso);
//! assert_eq!(ifc.to_string(), "2016-07-01");
//!
//! let leap_day = ifc_date::to_ifc("2016-06-17".parse().unwrap());
//! assert!(matches!(leap_day, IfcDay::LeapDay(_)));
//!
//! let date = IfcDate::new(2016, 13, 28).unwrap();
//! assert_eq!(date.succ().unwrap().weekday(), Weekday::YearDay);
//! ```

/// Returns `Err($err)` from the enclosing function, reporting the rejected
/// input at debug level when the `log` feature is enabled.
macro_rules! reject {
    ($err:expr $(,)?) => {{
        let err = $err;
        #[cfg(feature = "log")]
        log::debug!("rejected date input: {err}");
        return Err(err);
    }};
}

mod arith;
mod consts;
mod convert;
mod iso;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;
mod validate;

pub use arith::{Weekday, day_of_week, next_day, prev_day};
pub use consts::*;
pub use convert::{IfcDay, OrdinaryDate, to_ifc, to_ifc_with, to_iso, to_iso_with};
pub use iso::IsoDate;
pub use range::{Days, IfcDateRange, RangeError};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year, iso_days_in_month};
pub use validate::{is_valid, make};

use crate::prelude::*;
use std::str::FromStr;

/// A date in the International Fixed Calendar.
///
/// Intercalary days are stored as day 29 of month 6 (Leap Day) and month 13
/// (Year Day). Fields are private; every value has passed [`make`].
/// Field order gives chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct IfcDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Error raised when a value does not denote a real date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Year out of range: {0} (must be {min} to {max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i64),
    #[error("Invalid month: {0} (must be 1-{max})", max = IFC_MONTHS)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for IFC month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("No Leap Day in {0}: not a leap year")]
    NoLeapDay(i32),
    #[error("IFC {year:04}-{month:02}-29 is an intercalary day, not an ordinary date")]
    Intercalary { year: i32, month: u8 },
    #[error("Invalid ISO date {year:04}-{month:02}-{day:02}")]
    InvalidIsoDate { year: i32, month: u8, day: u8 },
    #[error("Empty date string")]
    EmptyInput,
}

impl IfcDate {
    /// Validates and constructs a date; same as [`make`].
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the triple is not a real IFC date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        make(year, month, day)
    }

    /// Builds from components that already passed validation together.
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month component (1..=13)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (1..=29)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Whether this is the Leap Day (06-29)
    pub const fn is_leap_day(&self) -> bool {
        self.day.is_intercalary() && self.month.get() == LEAP_DAY_MONTH
    }

    /// Whether this is the Year Day (13-29)
    pub const fn is_year_day(&self) -> bool {
        self.day.is_intercalary() && self.month.get() == YEAR_DAY_MONTH
    }

    /// One-based day of the year, Leap Day included (1..=366)
    pub const fn day_of_year(&self) -> u16 {
        let mut ordinal = (self.month.get() as u16 - 1) * DAYS_PER_MONTH as u16 + self.day.get() as u16;
        if self.year.is_leap() && self.month.get() > LEAP_DAY_MONTH {
            ordinal += 1;
        }
        ordinal
    }

    /// Days elapsed since 0001-01-01, which is day 0; earlier dates are negative
    pub const fn day_number(&self) -> i64 {
        types::days_before_year(self.year.get()) + self.day_of_year() as i64 - 1
    }

    /// Converts to the tagged boundary form
    pub const fn kind(self) -> IfcDay {
        if self.is_leap_day() {
            IfcDay::LeapDay(self.year)
        } else if self.is_year_day() {
            IfcDay::YearDay(self.year)
        } else {
            // Validation leaves day 29 only on the two intercalary days
            IfcDay::Ordinary(OrdinaryDate::from_validated(self))
        }
    }

    /// The following day; see [`next_day`].
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` when the year overflows `i32`.
    pub fn succ(&self) -> Result<Self, InvalidDateError> {
        next_day(*self)
    }

    /// The preceding day; see [`prev_day`].
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` when the year overflows `i32`.
    pub fn pred(&self) -> Result<Self, InvalidDateError> {
        prev_day(*self)
    }

    /// Weekday of this date; intercalary days get their own codes.
    pub fn weekday(&self) -> Weekday {
        arith::weekday_of(self.month.get(), self.day.get())
    }

    /// Converts to the Gregorian calendar.
    ///
    /// # Errors
    /// Propagates validation failures from [`to_iso`].
    pub fn to_iso(&self) -> Result<IsoDate, InvalidDateError> {
        to_iso(*self)
    }
}

impl FromStr for IfcDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_triple(s)?;
        make(year, month, day)
    }
}

/// Splits a canonical `YYYY-MM-DD` string into numeric components.
/// A leading `-` marks a year before year 0.
pub(crate) fn parse_triple(s: &str) -> Result<(i32, u8, u8), InvalidDateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InvalidDateError::EmptyInput);
    }

    let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((parse_year(year, negative)?, parse_u8(month)?, parse_u8(day)?)),
        _ => Err(InvalidDateError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
            parts.len()
        ))),
    }
}

/// Parses the digits of a year, applying the sign stripped off by the caller
fn parse_year(digits: &str, negative: bool) -> Result<i32, InvalidDateError> {
    if digits.starts_with('+') {
        return Err(InvalidDateError::InvalidFormat(digits.to_owned()));
    }
    let magnitude = i64::from(
        digits
            .parse::<u32>()
            .map_err(|_| InvalidDateError::InvalidFormat(digits.to_owned()))?,
    );
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| InvalidDateError::InvalidYear(value))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, InvalidDateError> {
    s.parse::<u8>()
        .map_err(|_| InvalidDateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(i32, u8, u8)> for IfcDate {
    type Error = InvalidDateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        make(value.0, value.1, value.2)
    }
}

impl From<IfcDate> for (i32, u8, u8) {
    fn from(date: IfcDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for IfcDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IfcDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
