//! Moveable feasts: events offset a fixed day count from Pascha.

use coptic_time::GregorianDate;

use crate::pascha::easter_date;

/// Celebration class of a moveable feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeastKind {
    MajorFeast,
    MinorFeast,
    Fast,
}

/// A feast whose date is a fixed offset from Easter for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveableFeast {
    pub name: &'static str,
    pub kind: FeastKind,
    pub date: GregorianDate,
    pub days_from_easter: i64,
}

/// Offsets per CopticChurch.net's official calendar, chronological order.
const FEAST_TABLE: [(&str, FeastKind, i64); 10] = [
    ("Fast of Nineveh", FeastKind::Fast, -69),
    ("Great Lent", FeastKind::Fast, -55),
    ("Palm Sunday", FeastKind::MajorFeast, -7),
    ("Holy Thursday", FeastKind::MinorFeast, -3),
    ("Good Friday", FeastKind::Fast, -2),
    ("Easter", FeastKind::MajorFeast, 0),
    ("Thomas Sunday", FeastKind::MinorFeast, 7),
    ("Ascension", FeastKind::MajorFeast, 39),
    ("Pentecost", FeastKind::MajorFeast, 49),
    ("Apostles' Fast", FeastKind::Fast, 50),
];

/// All moveable feasts for a Gregorian year, in chronological order.
pub fn moveable_feasts_for_year(year: i32) -> Vec<MoveableFeast> {
    let easter = easter_date(year);
    FEAST_TABLE
        .iter()
        .map(|&(name, kind, offset)| MoveableFeast {
            name,
            kind,
            date: easter.add_days(offset),
            days_from_easter: offset,
        })
        .collect()
}

/// Moveable feasts falling exactly on a given date.
pub fn moveable_feasts_for_date(date: GregorianDate) -> Vec<MoveableFeast> {
    moveable_feasts_for_year(date.year)
        .into_iter()
        .filter(|f| f.date == date)
        .collect()
}

/// Classify a date against the moveable fasts only.
///
/// Great Lent runs the 55 days before Easter (Easter day excluded), the
/// Fast of Nineveh exactly 3 days, and the Apostles' Fast from the day
/// after Pentecost through July 12 inclusive. Fixed fasts are not
/// considered here; see `liturgical_season_for_date` for the full set.
pub fn is_in_moveable_fast(date: GregorianDate) -> Option<MoveableFeast> {
    let feasts = moveable_feasts_for_year(date.year);
    let find = |name: &str| feasts.iter().copied().find(|f| f.name == name);

    if let Some(lent) = find("Great Lent") {
        // [Easter - 55, Easter): Easter itself is never a fasting day
        let easter = lent.date.add_days(55);
        if date >= lent.date && date < easter {
            return Some(lent);
        }
    }

    if let Some(nineveh) = find("Fast of Nineveh") {
        if date >= nineveh.date && date <= nineveh.date.add_days(2) {
            return Some(nineveh);
        }
    }

    if let Some(apostles) = find("Apostles' Fast") {
        let end = GregorianDate {
            year: date.year,
            month: 7,
            day: 12,
        };
        if date >= apostles.date && date <= end {
            return Some(apostles);
        }
    }

    None
}
