/// Smallest representable proleptic year (inclusive)
pub const MIN_YEAR: i32 = i32::MIN;

/// Largest representable proleptic year (inclusive)
pub const MAX_YEAR: i32 = i32::MAX;

/// Number of IFC months, including Sol
pub const IFC_MONTHS: u8 = 13;

/// Number of Gregorian months
pub const ISO_MONTHS: u8 = 12;

/// Every IFC month has exactly four weeks
pub const DAYS_PER_MONTH: u8 = 28;

/// Day number used by both intercalary days
pub const INTERCALARY_DAY: u8 = 29;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January (both calendars)
pub const JANUARY: u8 = 1;
/// Month holding the Leap Day (IFC June)
pub const LEAP_DAY_MONTH: u8 = 6;
/// IFC month inserted between June and July
pub const SOL: u8 = 7;
/// Month holding the Year Day (IFC December)
pub const YEAR_DAY_MONTH: u8 = 13;

/// Gregorian February
pub(crate) const FEBRUARY: u8 = 2;
/// Gregorian December
pub(crate) const DECEMBER: u8 = 12;
/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Zero-based day-of-year offset of the Leap Day (June 17 in leap years)
pub const LEAP_DAY_OFFSET: u16 = 6 * DAYS_PER_MONTH as u16;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English IFC month names (index 0 is unused)
pub const MONTH_NAMES: [&str; 14] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "Sol",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
