//! Day stepping and weekdays, computed on the IFC month/day structure alone.

use crate::consts::{
    DAYS_PER_MONTH, DAYS_PER_WEEK, INTERCALARY_DAY, JANUARY, LEAP_DAY_MONTH, MIN_DAY, SOL,
    YEAR_DAY_MONTH,
};
use crate::prelude::*;
use crate::validate::{make, revalidate};
use crate::{IfcDate, InvalidDateError};

/// Day of the week in the IFC.
///
/// Every month starts on a Sunday. Leap Day and Year Day sit outside the week
/// and have their own codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
    #[display(fmt = "Leap Day")]
    LeapDay = 8,
    #[display(fmt = "Year Day")]
    YearDay = 9,
}

const WEEK: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Numeric code: 1 (Sunday) to 7 (Saturday), 8 for Leap Day, 9 for Year Day
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this is a regular day of the week
    pub const fn is_weekday(self) -> bool {
        !matches!(self, Self::LeapDay | Self::YearDay)
    }
}

/// Steps one day forward.
///
/// | current             | next                  |
/// |---------------------|-----------------------|
/// | 13-28               | 13-29 (Year Day)      |
/// | 13-29               | next year, 01-01      |
/// | 06-28, leap year    | 06-29 (Leap Day)      |
/// | 06-28, common year  | 07-01                 |
/// | 06-29               | 07-01                 |
/// | m-28                | (m+1)-01              |
/// | m-d, d < 28         | m-(d+1)               |
///
/// Years roll over without bound in either direction.
///
/// # Errors
/// Returns the validation error for an invalid input, and
/// `InvalidYear` when the year would overflow `i32`.
pub fn next_day(date: IfcDate) -> Result<IfcDate, InvalidDateError> {
    let date = revalidate(date)?;
    let (year, month, day) = (date.year(), date.month(), date.day());

    let (year, month, day) = match (month, day) {
        (YEAR_DAY_MONTH, DAYS_PER_MONTH) => (year, YEAR_DAY_MONTH, INTERCALARY_DAY),
        (YEAR_DAY_MONTH, INTERCALARY_DAY) => (date.year_typed().checked_add(1)?.get(), JANUARY, MIN_DAY),
        (LEAP_DAY_MONTH, DAYS_PER_MONTH) if date.year_typed().is_leap() => {
            (year, LEAP_DAY_MONTH, INTERCALARY_DAY)
        },
        (LEAP_DAY_MONTH, DAYS_PER_MONTH | INTERCALARY_DAY) => (year, SOL, MIN_DAY),
        (_, DAYS_PER_MONTH) => (year, month + 1, MIN_DAY),
        (_, _) => (year, month, day + 1),
    };
    make(year, month, day)
}

/// Steps one day back; the exact inverse of [`next_day`].
///
/// # Errors
/// Returns the validation error for an invalid input, and
/// `InvalidYear` when the year would overflow `i32`.
pub fn prev_day(date: IfcDate) -> Result<IfcDate, InvalidDateError> {
    let date = revalidate(date)?;
    let (year, month, day) = (date.year(), date.month(), date.day());

    let (year, month, day) = match (month, day) {
        (JANUARY, MIN_DAY) => (date.year_typed().checked_add(-1)?.get(), YEAR_DAY_MONTH, INTERCALARY_DAY),
        (YEAR_DAY_MONTH, INTERCALARY_DAY) => (year, YEAR_DAY_MONTH, DAYS_PER_MONTH),
        (LEAP_DAY_MONTH, INTERCALARY_DAY) => (year, LEAP_DAY_MONTH, DAYS_PER_MONTH),
        (SOL, MIN_DAY) if date.year_typed().is_leap() => (year, LEAP_DAY_MONTH, INTERCALARY_DAY),
        (_, MIN_DAY) => (year, month - 1, DAYS_PER_MONTH),
        (_, _) => (year, month, day - 1),
    };
    make(year, month, day)
}

/// Weekday of an IFC date.
///
/// Days 1..=28 map to `((day - 1) mod 7) + 1` in every month. Only the two
/// intercalary positions accept day 29.
///
/// # Errors
/// Returns the validation error for any triple [`make`] rejects, including
/// day 29 outside June of a leap year and month 13.
pub fn day_of_week(year: i32, month: u8, day: u8) -> Result<Weekday, InvalidDateError> {
    let date = make(year, month, day)?;
    Ok(weekday_of(date.month(), date.day()))
}

/// Weekday of an already validated month/day pair
pub(crate) const fn weekday_of(month: u8, day: u8) -> Weekday {
    match (month, day) {
        (LEAP_DAY_MONTH, INTERCALARY_DAY) => Weekday::LeapDay,
        (YEAR_DAY_MONTH, INTERCALARY_DAY) => Weekday::YearDay,
        (_, _) => {
            debug_assert!(day >= MIN_DAY && day <= DAYS_PER_MONTH);
            WEEK[((day - MIN_DAY) % DAYS_PER_WEEK) as usize]
        },
    }
}
