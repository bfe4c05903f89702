//! Gregorian calendar date type.

use crate::error::DateError;
use crate::julian::{gregorian_to_jdn, is_gregorian_leap_year, jdn_to_gregorian, weekday_from_jdn};

/// A proleptic Gregorian calendar date.
///
/// Field order gives derived `Ord` chronological meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Validating constructor. Years 1–9999, real month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=9999).contains(&year) {
            return Err(DateError::OutOfRange(format!("Gregorian year {year}")));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidDate(format!("Gregorian month {month}")));
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDate(format!(
                "Gregorian day {day} of month {month}, year {year}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        gregorian_to_jdn(self.year as i64, self.month as i64, self.day as i64)
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// The date `n` days later (negative `n` for earlier).
    pub fn add_days(self, n: i64) -> Self {
        Self::from_jdn(self.to_jdn() + n)
    }

    /// Signed day count from `other` to `self`.
    pub fn days_since(self, other: Self) -> i64 {
        self.to_jdn() - other.to_jdn()
    }

    /// Weekday: 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u32 {
        weekday_from_jdn(self.to_jdn())
    }
}

/// Days in a Gregorian month, honoring the 4/100/400 leap rule.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_gregorian_leap_year(year as i64) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_bad_fields() {
        assert!(GregorianDate::new(2025, 2, 29).is_err());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2025, 13, 1).is_err());
        assert!(GregorianDate::new(2025, 0, 1).is_err());
        assert!(GregorianDate::new(0, 1, 1).is_err());
        assert!(GregorianDate::new(2025, 4, 31).is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let a = GregorianDate::new(2025, 4, 20).unwrap();
        let b = GregorianDate::new(2025, 12, 1).unwrap();
        let c = GregorianDate::new(2026, 1, 1).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn add_days_crosses_year_boundary() {
        let d = GregorianDate::new(2025, 12, 30).unwrap();
        assert_eq!(d.add_days(3), GregorianDate::new(2026, 1, 2).unwrap());
        assert_eq!(d.add_days(3).days_since(d), 3);
    }

    #[test]
    fn display_iso() {
        let d = GregorianDate::new(2025, 4, 9).unwrap();
        assert_eq!(d.to_string(), "2025-04-09");
    }
}
