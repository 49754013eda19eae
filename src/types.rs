use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DAYS_PER_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, IFC_MONTHS, INTERCALARY_DAY, LEAP_DAY_MONTH,
    LEAP_YEAR_CYCLE, MAX_YEAR, MIN_YEAR, MONTH_NAMES, YEAR_DAY_MONTH,
};
use crate::InvalidDateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A proleptic Gregorian year number.
/// Year 0 and negative years are valid; 0 is a leap year, as is -4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Smallest representable year
    pub const MIN: Self = Self(MIN_YEAR);

    /// Largest representable year
    pub const MAX: Self = Self(MAX_YEAR);

    /// Creates a new Year; every `i32` is a year
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether this year carries a Leap Day
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// Year shifted by `delta`
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` with the unrepresentable value on `i32` overflow.
    pub fn checked_add(self, delta: i32) -> Result<Self, InvalidDateError> {
        match self.0.checked_add(delta) {
            Some(value) => Ok(Self(value)),
            None => reject!(InvalidDateError::InvalidYear(i64::from(self.0) + i64::from(delta))),
        }
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    /// At least four digits; negative years carry a leading `-`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:04}", self.0.unsigned_abs())
        } else {
            write!(f, "{:04}", self.0)
        }
    }
}

/// An IFC month guaranteed to be in the range `1..=IFC_MONTHS` (1..=13).
/// Month 7 is Sol; Gregorian July through December shift to 8..=13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `IFC_MONTHS`
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidMonth` if the value is 0 or > `IFC_MONTHS`.
    pub fn new(value: u8) -> Result<Self, InvalidDateError> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDateError::InvalidMonth(value))?;
        if value > IFC_MONTHS {
            return Err(InvalidDateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Month from a zero-based index; callers keep `index < IFC_MONTHS`
    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!(index < IFC_MONTHS);
        Self(NonZeroU8::MIN.saturating_add(index))
    }

    /// English name of the month ("Sol" for month 7)
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An IFC day of month guaranteed to be valid for a given year and month.
/// Day 29 only exists as Leap Day (month 6, leap years) or Year Day (month 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The 29th, shared by Leap Day and Year Day
    pub(crate) const INTERCALARY: Self = Self(NonZeroU8::MIN.saturating_add(INTERCALARY_DAY - 1));

    /// Creates a new Day, validating it against the given year and month
    ///
    /// # Errors
    /// Returns `InvalidDateError::NoLeapDay` for June 29 of a common year and
    /// `InvalidDateError::InvalidDay` for any other day outside the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, InvalidDateError> {
        let invalid = InvalidDateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value == INTERCALARY_DAY && month.get() == LEAP_DAY_MONTH && !year.is_leap() {
            return Err(InvalidDateError::NoLeapDay(year.get()));
        }
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Day from a zero-based index within a 28-day month
    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!(index < DAYS_PER_MONTH);
        Self(NonZeroU8::MIN.saturating_add(index))
    }

    /// Whether this is one of the two intercalary days
    #[inline]
    pub const fn is_intercalary(self) -> bool {
        self.get() == INTERCALARY_DAY
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't check leap years without context, so only bound by the longest month
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        if value > INTERCALARY_DAY {
            return Err(InvalidDateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule, shared by both calendars.
/// Applies proleptically to year 0 and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in an IFC month, counting the intercalary day where one applies
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= IFC_MONTHS);

    if month == YEAR_DAY_MONTH || (month == LEAP_DAY_MONTH && is_leap_year(year)) {
        INTERCALARY_DAY
    } else {
        DAYS_PER_MONTH
    }
}

/// Days in a Gregorian month
pub const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days in a year; identical for both calendars
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Days from 0001-01-01 to January 1 of `year`; negative before year 1
pub(crate) const fn days_before_year(year: i32) -> i64 {
    let y = year as i64 - 1;
    y * DAYS_IN_COMMON_YEAR as i64 + y.div_euclid(LEAP_YEAR_CYCLE as i64)
        - y.div_euclid(CENTURY_CYCLE as i64)
        + y.div_euclid(GREGORIAN_CYCLE as i64)
}
