//! Julian Day Number arithmetic.
//!
//! All Gregorian ⇄ Coptic conversion goes through an integer JDN
//! intermediate so both directions share one auditable day count.
//! Gregorian and Julian calendar conversions use the Fliegel–Van Flandern
//! congruences; the Coptic conversion counts days from the Era of Martyrs
//! epoch with the 4-year intercalation cycle.

/// JDN of 1 Tout 1 AM (29 August 284 CE in the Julian calendar).
pub const COPTIC_EPOCH_JDN: i64 = 1_825_030;

/// Convert a proleptic Gregorian calendar date to a Julian Day Number.
pub fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Convert a Julian Day Number to a proleptic Gregorian calendar date.
pub fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year, month, day)
}

/// Convert a Julian calendar date to a Julian Day Number.
///
/// Needed by the Paschal computus, which produces Julian-calendar dates.
pub fn julian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
}

/// Convert a Coptic calendar date to a Julian Day Number.
///
/// Elapsed days before Coptic year `y` = 365·(y−1) + ⌊y/4⌋: the Coptic
/// leap year (6-day Nasie) is the year with `y mod 4 == 3`, so the
/// intercalary day lands immediately before each Julian leap February.
pub fn coptic_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    COPTIC_EPOCH_JDN - 1 + 365 * (year - 1) + year / 4 + 30 * (month - 1) + day
}

/// Convert a Julian Day Number to a Coptic calendar date.
///
/// Returns `None` for day numbers before the Coptic epoch.
pub fn jdn_to_coptic(jdn: i64) -> Option<(i64, i64, i64)> {
    if jdn < COPTIC_EPOCH_JDN {
        return None;
    }
    let days = jdn - COPTIC_EPOCH_JDN;

    // Initial estimate never overshoots; the loop advances at most twice.
    let mut year = (4 * days) / 1461 + 1;
    while elapsed_days(year + 1) <= days {
        year += 1;
    }
    let day_of_year = days - elapsed_days(year);
    let month = day_of_year / 30 + 1;
    let day = day_of_year % 30 + 1;
    Some((year, month, day))
}

/// Days elapsed from the Coptic epoch to the start of Coptic year `year`.
fn elapsed_days(year: i64) -> i64 {
    365 * (year - 1) + year / 4
}

/// Weekday for a JDN: 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_jdn(jdn: i64) -> u32 {
    ((jdn + 1).rem_euclid(7)) as u32
}

/// Gregorian leap-year rule (4/100/400).
pub fn is_gregorian_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Coptic leap-year rule: the 6th Nasie day falls in years ≡ 3 (mod 4).
pub fn is_coptic_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 3
}
