//! Proleptic Gregorian dates, the ISO side of every conversion.
//!
//! Only the calendar date is modelled. Day-of-year offsets are zero-based
//! here, matching the arithmetic in [`crate::to_ifc`].

use std::str::FromStr;

use crate::consts::{DECEMBER, ISO_MONTHS, JANUARY, MIN_DAY};
use crate::prelude::*;
use crate::types::{Year, days_in_year, iso_days_in_month};
use crate::{IfcDay, InvalidDateError, parse_triple};

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
pub struct IsoDate {
    year:  Year,
    month: u8,
    day:   u8,
}

impl IsoDate {
    /// Creates a Gregorian date, validating month and day for the year
    ///
    /// # Errors
    /// Returns `InvalidIsoDate` for a month or day that does not exist.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        if month < JANUARY
            || month > ISO_MONTHS
            || day < MIN_DAY
            || day > iso_days_in_month(year, month)
        {
            reject!(InvalidDateError::InvalidIsoDate { year, month, day });
        }
        Ok(Self {
            year: Year::new(year),
            month,
            day,
        })
    }

    /// Maps a zero-based day-of-year offset back onto a month and day.
    pub(crate) fn from_day_of_year(year: Year, offset: u16) -> Result<Self, InvalidDateError> {
        if offset >= days_in_year(year.get()) {
            return Err(InvalidDateError::InvalidIsoDate {
                year: year.get(),
                month: DECEMBER,
                day: 0,
            });
        }

        let mut remaining = offset;
        let mut month = JANUARY;
        loop {
            let len = u16::from(iso_days_in_month(year.get(), month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }

        // remaining < len <= 31, so the narrowing cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        let day = remaining as u8 + MIN_DAY;
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month component (1..=12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day component (1..=31)
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Zero-based ordinal within the year (January 1 is 0)
    pub fn day_of_year(&self) -> u16 {
        let before: u16 = (JANUARY..self.month)
            .map(|m| u16::from(iso_days_in_month(self.year.get(), m)))
            .sum();
        before + u16::from(self.day - MIN_DAY)
    }

    /// Whether this is December 31, the date that becomes Year Day
    pub const fn is_last_day_of_year(&self) -> bool {
        self.month == DECEMBER && self.day == 31
    }

    /// Converts to the IFC; see [`crate::to_ifc`].
    pub fn to_ifc(&self) -> IfcDay {
        crate::to_ifc(*self)
    }
}

impl FromStr for IsoDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_triple(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for IsoDate {
    type Error = InvalidDateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<IsoDate> for (i32, u8, u8) {
    fn from(date: IsoDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IsoDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
