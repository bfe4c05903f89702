//! Paschal computus: the Gregorian date of Orthodox (Alexandrian) Easter.
//!
//! Uses the Meeus "Julian Easter" congruences (golden number / epact) to
//! find Easter in the Julian calendar, then rebases the result onto the
//! Gregorian calendar through the shared Julian Day Number intermediate.
//! The Julian→Gregorian century offset therefore needs no lookup table.

use coptic_time::{GregorianDate, jdn_to_gregorian, julian_to_jdn};

/// Gregorian date of Pascha (Orthodox Easter) for a Gregorian year.
///
/// Pure and deterministic; every moveable feast and fast offsets from
/// this anchor.
pub fn easter_date(year: i32) -> GregorianDate {
    let year = year as i64;
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);

    // Julian-calendar month (3 or 4) and day
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    let jdn = julian_to_jdn(year, month, day);
    let (gy, gm, gd) = jdn_to_gregorian(jdn);
    GregorianDate {
        year: gy as i32,
        month: gm as u32,
        day: gd as u32,
    }
}

/// Whether a date is Easter Sunday of its own year.
pub fn is_easter_sunday(date: GregorianDate) -> bool {
    easter_date(date.year) == date
}
