//! Types for liturgical season classification results.

use coptic_time::GregorianDate;

/// Whether a season anchors to the calendar or to Easter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonKind {
    Fixed,
    Moveable,
}

/// The liturgical seasons and fasting periods of the Coptic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonName {
    NinevehFast,
    GreatLent,
    HolyWeek,
    PaschalSeason,
    ApostlesFast,
    NativityFast,
}

impl SeasonName {
    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::NinevehFast => "Fast of Nineveh",
            Self::GreatLent => "Great Lent",
            Self::HolyWeek => "Holy Week",
            Self::PaschalSeason => "Paschal Season",
            Self::ApostlesFast => "Apostles' Fast",
            Self::NativityFast => "Nativity Fast",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::NinevehFast => "Three-day fast commemorating the repentance of Nineveh",
            Self::GreatLent => "The Great Fast of 55 days preparing for Easter",
            Self::HolyWeek => "The week of the passion of Christ",
            Self::PaschalSeason => "The 50 days of joy from Easter to Pentecost",
            Self::ApostlesFast => "Fast from Pentecost to the Feast of the Apostles",
            Self::NativityFast => "The 43-day fast preparing for Christmas",
        }
    }

    /// Tie-break rank when windows overlap; lower wins.
    pub fn priority(self) -> u8 {
        match self {
            Self::HolyWeek => 1,
            Self::GreatLent => 2,
            Self::NinevehFast => 3,
            Self::ApostlesFast => 4,
            Self::NativityFast => 5,
            Self::PaschalSeason => 6,
        }
    }
}

impl std::fmt::Display for SeasonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A concrete season window for one year.
///
/// Windows for the same year may overlap (Holy Week sits inside Great
/// Lent's nominal range); classification resolves overlaps through
/// [`SeasonName::priority`], not interval geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub name: SeasonName,
    pub start: GregorianDate,
    pub end: GregorianDate,
    pub fasting: bool,
    pub kind: SeasonKind,
}

impl SeasonWindow {
    /// Whether the window contains a date, inclusive of both ends.
    ///
    /// A window whose start is after its end (a zero-length Apostles'
    /// Fast) contains nothing.
    pub fn contains(&self, date: GregorianDate) -> bool {
        self.start <= date && date <= self.end
    }
}
