//! Gregorian ⇄ Coptic calendar conversion.
//!
//! This crate provides:
//! - Julian Day Number ⇄ calendar conversions (Gregorian, Julian, Coptic)
//! - Validated `GregorianDate` and `CopticDate` types
//! - The bidirectional conversion used by the rest of the engine
//!
//! The Coptic calendar (Anno Martyrum) starts 29 August 284 CE (Julian)
//! and follows the Julian 4-year leap cycle with no century exception.
//! Both conversion directions go through a shared integer Julian Day
//! Number, so `to_gregorian(to_coptic(d)) == d` over the entire
//! supported range (0284-08-29 through Gregorian year 9999).

pub mod coptic;
pub mod error;
pub mod gregorian;
pub mod julian;

pub use coptic::{COPTIC_MONTHS, CopticDate, days_in_coptic_month, days_in_coptic_year};
pub use error::DateError;
pub use gregorian::{GregorianDate, days_in_month};
pub use julian::{
    COPTIC_EPOCH_JDN, coptic_to_jdn, gregorian_to_jdn, is_coptic_leap_year,
    is_gregorian_leap_year, jdn_to_coptic, jdn_to_gregorian, julian_to_jdn, weekday_from_jdn,
};

/// Convert a Gregorian date to its Coptic equivalent.
///
/// Fails with [`DateError::OutOfRange`] for dates before the Coptic
/// epoch (0284-08-29).
pub fn to_coptic(date: GregorianDate) -> Result<CopticDate, DateError> {
    CopticDate::from_jdn(date.to_jdn())
        .ok_or_else(|| DateError::OutOfRange(format!("{date} precedes the Coptic epoch")))
}

/// Convert a Coptic date to its Gregorian equivalent.
pub fn to_gregorian(date: CopticDate) -> GregorianDate {
    GregorianDate::from_jdn(date.to_jdn())
}
