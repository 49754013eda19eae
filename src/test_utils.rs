//! Builders for tests; they panic on invalid input.

use crate::{IfcDate, IfcDateRange, IfcDay, IsoDate, Month, OrdinaryDate, Year};

pub fn year(value: i32) -> Year {
    Year::new(value)
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap_or_else(|e| panic!("bad month {value}: {e}"))
}

pub fn ifc(y: i32, m: u8, d: u8) -> IfcDate {
    IfcDate::new(y, m, d).unwrap_or_else(|e| panic!("bad IFC date: {e}"))
}

pub fn ordinary(y: i32, m: u8, d: u8) -> IfcDay {
    IfcDay::Ordinary(OrdinaryDate::new(ifc(y, m, d)).unwrap_or_else(|e| panic!("not an ordinary date: {e}")))
}

pub fn iso(y: i32, m: u8, d: u8) -> IsoDate {
    IsoDate::new(y, m, d).unwrap_or_else(|e| panic!("bad ISO date: {e}"))
}

pub fn range(start: (i32, u8, u8), end: (i32, u8, u8)) -> IfcDateRange {
    IfcDateRange::new(ifc(start.0, start.1, start.2), ifc(end.0, end.1, end.2))
        .unwrap_or_else(|e| panic!("bad range: {e}"))
}
