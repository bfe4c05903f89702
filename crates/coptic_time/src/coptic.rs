//! Coptic calendar date type (Anno Martyrum).

use crate::error::DateError;
use crate::julian::{coptic_to_jdn, is_coptic_leap_year, jdn_to_coptic};

/// English Coptic month names, months 1–13.
pub const COPTIC_MONTHS: [&str; 13] = [
    "Tout",
    "Baba",
    "Hator",
    "Kiahk",
    "Toba",
    "Amshir",
    "Baramhat",
    "Baramouda",
    "Bashans",
    "Paona",
    "Epep",
    "Mesra",
    "Nasie",
];

/// A Coptic calendar date: 12 months of 30 days plus the 5/6-day
/// intercalary month Nasie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CopticDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CopticDate {
    /// Validating constructor. Years 1–9999; months 1–12 have 30 days,
    /// Nasie has 5 days (6 in leap years, `year mod 4 == 3`).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=9999).contains(&year) {
            return Err(DateError::OutOfRange(format!("Coptic year {year}")));
        }
        if !(1..=13).contains(&month) {
            return Err(DateError::InvalidDate(format!("Coptic month {month}")));
        }
        let max_day = days_in_coptic_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDate(format!(
                "Coptic day {day} of month {month}, year {year}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        coptic_to_jdn(self.year as i64, self.month as i64, self.day as i64)
    }

    /// Date for a Julian Day Number on or after the Coptic epoch.
    pub fn from_jdn(jdn: i64) -> Option<Self> {
        let (year, month, day) = jdn_to_coptic(jdn)?;
        Some(Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        })
    }

    /// English month name.
    pub fn month_name(self) -> &'static str {
        COPTIC_MONTHS[(self.month - 1) as usize]
    }

    /// Lookup key used by the synaxarium dataset, e.g. `"15 Toba"`.
    pub fn date_key(self) -> String {
        format!("{} {}", self.day, self.month_name())
    }
}

/// Days in a Coptic month for a given year.
pub fn days_in_coptic_month(year: i32, month: u32) -> u32 {
    match month {
        1..=12 => 30,
        13 => {
            if is_coptic_leap_year(year as i64) {
                6
            } else {
                5
            }
        }
        _ => 0,
    }
}

/// Total days in a Coptic year: 365, or 366 in leap years.
pub fn days_in_coptic_year(year: i32) -> u32 {
    (1..=13).map(|m| days_in_coptic_month(year, m)).sum()
}

impl std::fmt::Display for CopticDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} AM", self.day, self.month_name(), self.year)
    }
}
