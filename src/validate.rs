//! The single construction path for [`IfcDate`].

use crate::types::{Day, Month, Year};
use crate::{IfcDate, InvalidDateError};

/// Whether `(year, month, day)` denotes a real IFC date.
///
/// Days 1..=28 exist in every month; day 29 exists only as Year Day
/// (month 13, every year) and Leap Day (month 6, leap years). Any `i32`
/// is a year, including 0 and negative proleptic years.
pub fn is_valid(year: i32, month: u8, day: u8) -> bool {
    build(year, month, day).is_ok()
}

/// Validates and constructs an [`IfcDate`].
///
/// # Errors
/// Returns the first failing component: `InvalidMonth`, `NoLeapDay` for
/// June 29 of a common year, or `InvalidDay`.
pub fn make(year: i32, month: u8, day: u8) -> Result<IfcDate, InvalidDateError> {
    match build(year, month, day) {
        Ok(date) => Ok(date),
        Err(err) => reject!(err),
    }
}

/// Re-checks a date obtained from outside this crate's constructors.
pub(crate) fn revalidate(date: IfcDate) -> Result<IfcDate, InvalidDateError> {
    make(date.year(), date.month(), date.day())
}

fn build(year: i32, month: u8, day: u8) -> Result<IfcDate, InvalidDateError> {
    let year = Year::new(year);
    let month = Month::new(month)?;
    let day = Day::new(day, year, month)?;
    Ok(IfcDate::from_parts(year, month, day))
}
