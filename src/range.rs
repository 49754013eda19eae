use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::{Day, Month, Year};
use crate::{IfcDate, InvalidDateError, RANGE_SEPARATOR, YEAR_DAY_MONTH, next_day, prelude::*};

/// An inclusive span of IFC dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct IfcDateRange {
    start: IfcDate,
    end:   IfcDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: IfcDate, end: IfcDate },

    /// Error parsing date component.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl IfcDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: IfcDate, end: IfcDate) -> Result<Self, RangeError> {
        if start > end {
            reject!(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every day of one IFC year, Year Day included
    pub fn year(year: i32) -> Self {
        let year = Year::new(year);
        Self {
            start: IfcDate::from_parts(year, Month::from_index(0), Day::from_index(0)),
            end:   IfcDate::from_parts(year, Month::from_index(YEAR_DAY_MONTH - 1), Day::INTERCALARY),
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> IfcDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> IfcDate {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &IfcDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days in the range, both ends included
    pub const fn len(&self) -> u64 {
        (self.end.day_number() - self.start.day_number()).unsigned_abs() + 1
    }

    /// A range always holds at least its start date
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the days in order, stepping with [`next_day`]
    pub const fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

impl IntoIterator for IfcDateRange {
    type Item = IfcDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IfcDateRange {
    type Item = IfcDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Day-by-day iterator over an [`IfcDateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<IfcDate>,
    end:  IfcDate,
}

impl Iterator for Days {
    type Item = IfcDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // Stepping past the last i32 year fails, which also ends the iteration
        self.next = if current < self.end {
            next_day(current).ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| (self.end.day_number() - next.day_number()).unsigned_abs() + 1);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Days {}

impl FromStr for IfcDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<IfcDate>()?;
                let end = end_str.trim().parse::<IfcDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for IfcDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IfcDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
