//! Mapping between Gregorian and IFC dates through the day-of-year offset.
//!
//! Once the two intercalary days are taken out, the remaining 364 days of a
//! year split evenly into 13 months of 28. Year Day and Leap Day are found by
//! their absolute offset and never go through the month/day division.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::consts::{
    DAYS_IN_MONTH, DAYS_PER_MONTH, DECEMBER, INTERCALARY_DAY, LEAP_DAY_MONTH, LEAP_DAY_OFFSET,
    YEAR_DAY_MONTH,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::validate::{make, revalidate};
use crate::{IfcDate, InvalidDateError, IsoDate};

/// An IFC date on day 1..=28 of its month; never Leap Day or Year Day.
///
/// Derefs to the underlying [`IfcDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref)]
#[display(fmt = "{_0}")]
pub struct OrdinaryDate(IfcDate);

impl OrdinaryDate {
    /// Wraps a date that belongs to a week.
    ///
    /// # Errors
    /// Returns `InvalidDateError::Intercalary` for Leap Day and Year Day.
    pub fn new(date: IfcDate) -> Result<Self, InvalidDateError> {
        if date.day_typed().is_intercalary() {
            reject!(InvalidDateError::Intercalary {
                year:  date.year(),
                month: date.month(),
            });
        }
        Ok(Self(date))
    }

    /// Callers guarantee `date` is not day 29
    pub(crate) const fn from_validated(date: IfcDate) -> Self {
        debug_assert!(!date.day_typed().is_intercalary());
        Self(date)
    }

    /// Returns the wrapped date
    pub const fn date(self) -> IfcDate {
        self.0
    }
}

impl TryFrom<IfcDate> for OrdinaryDate {
    type Error = InvalidDateError;

    fn try_from(date: IfcDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl From<OrdinaryDate> for IfcDate {
    fn from(date: OrdinaryDate) -> Self {
        date.0
    }
}

/// An IFC date as seen by callers, with the intercalary days tagged.
///
/// `IfcDate` stores both intercalary days as day 29; this form makes them
/// explicit. Every calendar day has exactly one `IfcDay` value, and
/// conversions in both directions are lossless for valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IfcDay {
    /// A day inside one of the 13 four-week months
    #[display(fmt = "{_0}")]
    Ordinary(OrdinaryDate),
    /// June 29, leap years only
    #[display(fmt = "{_0}-06-29")]
    LeapDay(Year),
    /// December 29, every year
    #[display(fmt = "{_0}-13-29")]
    YearDay(Year),
}

impl IfcDay {
    /// Returns the year (always present)
    pub const fn year(&self) -> i32 {
        match self {
            Self::Ordinary(date) => date.date().year(),
            Self::LeapDay(year) | Self::YearDay(year) => year.get(),
        }
    }

    /// Whether this is one of the two non-week days
    pub const fn is_intercalary(&self) -> bool {
        !matches!(self, Self::Ordinary(_))
    }
}

impl From<IfcDate> for IfcDay {
    fn from(date: IfcDate) -> Self {
        date.kind()
    }
}

impl TryFrom<IfcDay> for IfcDate {
    type Error = InvalidDateError;

    fn try_from(value: IfcDay) -> Result<Self, Self::Error> {
        match value {
            IfcDay::Ordinary(date) => revalidate(date.date()),
            IfcDay::LeapDay(year) => make(year.get(), LEAP_DAY_MONTH, INTERCALARY_DAY),
            IfcDay::YearDay(year) => make(year.get(), YEAR_DAY_MONTH, INTERCALARY_DAY),
        }
    }
}

impl FromStr for IfcDay {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IfcDate>().map(IfcDate::kind)
    }
}

impl From<IsoDate> for IfcDate {
    fn from(iso: IsoDate) -> Self {
        match to_ifc(iso) {
            IfcDay::Ordinary(date) => date.date(),
            IfcDay::LeapDay(year) => IfcDate::from_parts(
                year,
                Month::from_index(LEAP_DAY_MONTH - 1),
                Day::INTERCALARY,
            ),
            IfcDay::YearDay(year) => IfcDate::from_parts(
                year,
                Month::from_index(YEAR_DAY_MONTH - 1),
                Day::INTERCALARY,
            ),
        }
    }
}

impl TryFrom<IfcDate> for IsoDate {
    type Error = InvalidDateError;

    fn try_from(value: IfcDate) -> Result<Self, Self::Error> {
        to_iso(value)
    }
}

/// Converts a Gregorian date to the IFC.
///
/// December 31 is always Year Day. In a leap year, offset 168 (June 17) is
/// Leap Day and every later offset shifts down by one before the 28-day
/// division.
pub fn to_ifc(iso: IsoDate) -> IfcDay {
    let year = iso.year_typed();
    if iso.is_last_day_of_year() {
        return IfcDay::YearDay(year);
    }

    let mut offset = iso.day_of_year();
    if year.is_leap() {
        match offset.cmp(&LEAP_DAY_OFFSET) {
            Ordering::Equal => return IfcDay::LeapDay(year),
            Ordering::Greater => offset -= 1,
            Ordering::Less => {},
        }
    }

    let per_month = u16::from(DAYS_PER_MONTH);
    // offset < 364 here, so both quotient and remainder fit in u8
    #[allow(clippy::cast_possible_truncation)]
    let (month, day) = ((offset / per_month) as u8, (offset % per_month) as u8);
    IfcDay::Ordinary(OrdinaryDate::from_validated(IfcDate::from_parts(
        year,
        Month::from_index(month),
        Day::from_index(day),
    )))
}

/// Converts an IFC date, plain or tagged, back to the Gregorian calendar.
///
/// # Errors
/// Returns `NoLeapDay` for a Leap Day in a common year, or the validation
/// error of an ordinary date that does not exist.
pub fn to_iso(day: impl Into<IfcDay>) -> Result<IsoDate, InvalidDateError> {
    match day.into() {
        IfcDay::YearDay(year) => IsoDate::new(year.get(), DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]),
        IfcDay::LeapDay(year) => {
            if !year.is_leap() {
                reject!(InvalidDateError::NoLeapDay(year.get()));
            }
            IsoDate::from_day_of_year(year, LEAP_DAY_OFFSET)
        },
        IfcDay::Ordinary(date) => {
            let date = revalidate(date.date())?;
            let mut offset = u16::from(date.month() - 1) * u16::from(DAYS_PER_MONTH) + u16::from(date.day() - 1);
            if date.year_typed().is_leap() && offset >= LEAP_DAY_OFFSET {
                offset += 1;
            }
            IsoDate::from_day_of_year(date.year_typed(), offset)
        },
    }
}

/// [`to_ifc`], carrying an accompanying value (e.g. a time of day) through untouched.
pub fn to_ifc_with<T>(iso: IsoDate, extra: T) -> (IfcDay, T) {
    (to_ifc(iso), extra)
}

/// [`to_iso`], carrying an accompanying value through untouched.
///
/// # Errors
/// Same as [`to_iso`].
pub fn to_iso_with<T>(day: impl Into<IfcDay>, extra: T) -> Result<(IsoDate, T), InvalidDateError> {
    Ok((to_iso(day)?, extra))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ifc, iso, ordinary, year};
    use crate::types::days_in_year;

    #[test]
    fn test_to_ifc_scenarios() {
        struct TestCase {
            iso:      (i32, u8, u8),
            expected: IfcDay,
        }

        let cases = [
            TestCase { iso: (2016, 1, 1), expected: ordinary(2016, 1, 1) },
            TestCase { iso: (2016, 1, 28), expected: ordinary(2016, 1, 28) },
            TestCase { iso: (2016, 1, 29), expected: ordinary(2016, 2, 1) },
            TestCase { iso: (2016, 6, 16), expected: ordinary(2016, 6, 28) },
            TestCase { iso: (2016, 6, 17), expected: IfcDay::LeapDay(year(2016)) },
            TestCase { iso: (2016, 6, 18), expected: ordinary(2016, 7, 1) },
            TestCase { iso: (2017, 6, 17), expected: ordinary(2017, 6, 28) },
            TestCase { iso: (2017, 6, 18), expected: ordinary(2017, 7, 1) },
            TestCase { iso: (2016, 12, 30), expected: ordinary(2016, 13, 28) },
            TestCase { iso: (2016, 12, 31), expected: IfcDay::YearDay(year(2016)) },
            TestCase { iso: (2017, 12, 30), expected: ordinary(2017, 13, 28) },
            TestCase { iso: (2017, 12, 31), expected: IfcDay::YearDay(year(2017)) },
            TestCase { iso: (2018, 1, 1), expected: ordinary(2018, 1, 1) },
            TestCase { iso: (1900, 6, 17), expected: ordinary(1900, 6, 28) },
            TestCase { iso: (2000, 6, 17), expected: IfcDay::LeapDay(year(2000)) },
            TestCase { iso: (0, 6, 17), expected: IfcDay::LeapDay(year(0)) },
            TestCase { iso: (0, 12, 31), expected: IfcDay::YearDay(year(0)) },
            TestCase { iso: (-1, 6, 17), expected: ordinary(-1, 6, 28) },
            TestCase { iso: (-4, 6, 18), expected: ordinary(-4, 7, 1) },
            TestCase { iso: (10000, 6, 17), expected: IfcDay::LeapDay(year(10000)) },
        ];

        for case in &cases {
            let (y, m, d) = case.iso;
            assert_eq!(to_ifc(iso(y, m, d)), case.expected, "ISO {y}-{m}-{d}");
        }
    }

    #[test]
    fn test_to_iso_scenarios() {
        assert_eq!(to_iso(ifc(2016, 1, 1)), Ok(iso(2016, 1, 1)));
        assert_eq!(to_iso(ifc(2016, 2, 1)), Ok(iso(2016, 1, 29)));
        assert_eq!(to_iso(ifc(2016, 7, 1)), Ok(iso(2016, 6, 18)));
        assert_eq!(to_iso(ifc(2017, 7, 1)), Ok(iso(2017, 6, 18)));
        assert_eq!(to_iso(IfcDay::LeapDay(year(2016))), Ok(iso(2016, 6, 17)));
        assert_eq!(to_iso(IfcDay::YearDay(year(2017))), Ok(iso(2017, 12, 31)));
        assert_eq!(to_iso(ifc(2016, 13, 29)), Ok(iso(2016, 12, 31)));
        assert_eq!(to_iso(ifc(2016, 6, 29)), Ok(iso(2016, 6, 17)));
    }

    #[test]
    fn test_to_iso_rejects_leap_day_in_common_year() {
        assert_eq!(
            to_iso(IfcDay::LeapDay(year(2017))),
            Err(InvalidDateError::NoLeapDay(2017))
        );
        assert_eq!(
            to_iso(IfcDay::LeapDay(year(1900))),
            Err(InvalidDateError::NoLeapDay(1900))
        );
    }

    #[test]
    fn test_iso_round_trip() {
        for y in (-404..=-396).chain(1896..=2024).chain(9996..=10004) {
            for offset in 0..days_in_year(y) {
                let date = IsoDate::from_day_of_year(year(y), offset).unwrap();
                assert_eq!(to_iso(to_ifc(date)), Ok(date), "ISO {date}");
            }
        }
    }

    #[test]
    fn test_ifc_round_trip() {
        for y in [-5, -4, 0, 1900, 2000, 2016, 2017, 10000] {
            for m in 1..=13 {
                for d in 1..=29 {
                    let Ok(date) = IfcDate::new(y, m, d) else {
                        continue;
                    };
                    let back = to_ifc(to_iso(date).unwrap());
                    assert_eq!(back, date.kind(), "IFC {date}");
                }
            }
        }
    }

    #[test]
    fn test_conversion_is_monotonic() {
        let mut previous = IfcDate::from(iso(2016, 1, 1));
        for offset in 1..days_in_year(2016) {
            let current = IfcDate::from(IsoDate::from_day_of_year(year(2016), offset).unwrap());
            assert!(previous < current, "{previous} !< {current}");
            previous = current;
        }
    }

    #[test]
    fn test_from_iso_stores_intercalary_days_as_twenty_ninth() {
        assert_eq!(IfcDate::from(iso(2016, 6, 17)), ifc(2016, 6, 29));
        assert_eq!(IfcDate::from(iso(2017, 12, 31)), ifc(2017, 13, 29));
        assert_eq!(IsoDate::try_from(ifc(2017, 13, 29)), Ok(iso(2017, 12, 31)));
    }

    #[test]
    fn test_ifc_day_conversions() {
        assert_eq!(IfcDay::from(ifc(2016, 6, 29)), IfcDay::LeapDay(year(2016)));
        assert_eq!(IfcDate::try_from(IfcDay::YearDay(year(2017))), Ok(ifc(2017, 13, 29)));
        assert_eq!(
            IfcDate::try_from(IfcDay::LeapDay(year(2017))),
            Err(InvalidDateError::NoLeapDay(2017))
        );
    }

    #[test]
    fn test_ordinary_rejects_intercalary_days() {
        struct TestCase {
            date:     IfcDate,
            expected: Result<(), InvalidDateError>,
        }

        let cases = [
            TestCase { date: ifc(2016, 6, 28), expected: Ok(()) },
            TestCase { date: ifc(2017, 13, 28), expected: Ok(()) },
            TestCase {
                date:     ifc(2016, 6, 29),
                expected: Err(InvalidDateError::Intercalary { year: 2016, month: 6 }),
            },
            TestCase {
                date:     ifc(2017, 13, 29),
                expected: Err(InvalidDateError::Intercalary { year: 2017, month: 13 }),
            },
            TestCase {
                date:     ifc(0, 6, 29),
                expected: Err(InvalidDateError::Intercalary { year: 0, month: 6 }),
            },
        ];

        for case in &cases {
            let result = OrdinaryDate::try_from(case.date);
            assert_eq!(result.map(|_| ()), case.expected, "IFC {}", case.date);
        }
    }

    #[test]
    fn test_each_day_has_one_tagged_form() {
        for y in [2016, 2017] {
            let mut seen = std::collections::HashSet::new();
            for m in 1..=13 {
                for d in 1..=29 {
                    let Ok(date) = IfcDate::new(y, m, d) else {
                        continue;
                    };
                    let tagged = IfcDay::from(date);
                    assert_eq!(tagged.is_intercalary(), d == 29, "IFC {date}");
                    assert_eq!(IfcDate::try_from(tagged), Ok(date), "IFC {date}");
                    assert!(seen.insert(tagged), "IFC {date} tagged twice");
                }
            }
            assert_eq!(seen.len(), usize::from(days_in_year(y)), "Year {y}");
        }
    }

    #[test]
    fn test_ordinary_date_accessors() {
        let date = OrdinaryDate::new(ifc(2017, 3, 4)).unwrap();
        assert_eq!(date.date(), ifc(2017, 3, 4));
        assert_eq!(date.month(), 3);
        assert_eq!(IfcDate::from(date), ifc(2017, 3, 4));
        assert_eq!(date.to_string(), "2017-03-04");
    }

    #[test]
    fn test_ifc_day_display_and_parse() {
        assert_eq!(IfcDay::LeapDay(year(2016)).to_string(), "2016-06-29");
        assert_eq!(IfcDay::YearDay(year(2017)).to_string(), "2017-13-29");
        assert_eq!(ordinary(2017, 3, 4).to_string(), "2017-03-04");
        assert_eq!(IfcDay::LeapDay(year(-4)).to_string(), "-0004-06-29");
        assert_eq!("2016-06-29".parse::<IfcDay>(), Ok(IfcDay::LeapDay(year(2016))));
        assert_eq!("2017-03-04".parse::<IfcDay>(), Ok(ordinary(2017, 3, 4)));
        assert_eq!("0000-13-29".parse::<IfcDay>(), Ok(IfcDay::YearDay(year(0))));
        assert!("2017-06-29".parse::<IfcDay>().is_err());
    }

    #[test]
    fn test_ifc_day_accessors() {
        assert_eq!(IfcDay::LeapDay(year(2016)).year(), 2016);
        assert!(IfcDay::YearDay(year(2016)).is_intercalary());
        assert_eq!(ordinary(-44, 3, 15).year(), -44);
        assert!(!ordinary(2016, 1, 1).is_intercalary());
    }

    #[test]
    fn test_timestamp_passthrough() {
        let (day, time) = to_ifc_with(iso(2017, 12, 31), (23, 59, 59));
        assert_eq!(day, IfcDay::YearDay(year(2017)));
        assert_eq!(time, (23, 59, 59));

        let (date, note) = to_iso_with(ifc(2016, 7, 1), "noon").unwrap();
        assert_eq!(date, iso(2016, 6, 18));
        assert_eq!(note, "noon");

        assert!(to_iso_with(IfcDay::LeapDay(year(2017)), ()).is_err());
    }
}
