//! Season window computation and priority-ordered date classification.

use coptic_time::GregorianDate;

use crate::pascha::easter_date;
use crate::season_types::{SeasonKind, SeasonName, SeasonWindow};

/// All season windows anchored to a Gregorian year, precomputed once.
///
/// Includes the previous year's Nativity Fast (Nov 25 of `year - 1`
/// through Jan 6 of `year`) so the returned calendar is self-contained
/// across the December/January boundary.
pub fn season_calendar_for_year(year: i32) -> Vec<SeasonWindow> {
    let easter = easter_date(year);
    let mut seasons = Vec::with_capacity(7);

    seasons.push(SeasonWindow {
        name: SeasonName::NinevehFast,
        start: easter.add_days(-69),
        end: easter.add_days(-67),
        fasting: true,
        kind: SeasonKind::Moveable,
    });
    seasons.push(SeasonWindow {
        name: SeasonName::GreatLent,
        start: easter.add_days(-55),
        end: easter.add_days(-1),
        fasting: true,
        kind: SeasonKind::Moveable,
    });
    seasons.push(SeasonWindow {
        name: SeasonName::HolyWeek,
        start: easter.add_days(-7),
        end: easter.add_days(-1),
        fasting: true,
        kind: SeasonKind::Moveable,
    });
    seasons.push(SeasonWindow {
        name: SeasonName::PaschalSeason,
        start: easter,
        end: easter.add_days(49),
        fasting: false,
        kind: SeasonKind::Moveable,
    });
    // Moveable start, fixed end; `contains` treats start > end as empty
    seasons.push(SeasonWindow {
        name: SeasonName::ApostlesFast,
        start: easter.add_days(50),
        end: GregorianDate {
            year,
            month: 7,
            day: 12,
        },
        fasting: true,
        kind: SeasonKind::Moveable,
    });
    seasons.push(nativity_fast(year));
    seasons.push(nativity_fast(year - 1));

    seasons
}

/// Nativity Fast starting Nov 25 of `start_year`, spanning into January.
fn nativity_fast(start_year: i32) -> SeasonWindow {
    SeasonWindow {
        name: SeasonName::NativityFast,
        start: GregorianDate {
            year: start_year,
            month: 11,
            day: 25,
        },
        end: GregorianDate {
            year: start_year + 1,
            month: 1,
            day: 6,
        },
        fasting: true,
        kind: SeasonKind::Fixed,
    }
}

/// Classify a date into its liturgical season, or `None` for Ordinary
/// Time.
///
/// Candidate windows come from the date's own year and both adjacent
/// years so windows that straddle the year boundary stay live; overlaps
/// resolve by [`SeasonName::priority`]. Never errors.
pub fn liturgical_season_for_date(date: GregorianDate) -> Option<SeasonWindow> {
    (date.year - 1..=date.year + 1)
        .flat_map(season_calendar_for_year)
        .filter(|s| s.contains(date))
        .min_by_key(|s| s.name.priority())
}

/// Whether a date falls in any fasting period, fixed or moveable.
pub fn is_in_fasting_period(date: GregorianDate) -> bool {
    liturgical_season_for_date(date).is_some_and(|s| s.fasting)
}

/// Fasting windows of a year's season calendar.
pub fn fasting_periods_for_year(year: i32) -> Vec<SeasonWindow> {
    season_calendar_for_year(year)
        .into_iter()
        .filter(|s| s.fasting)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(year: i32, month: u32, day: u32) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn calendar_has_both_nativity_windows() {
        let seasons = season_calendar_for_year(2025);
        let nativities: Vec<_> = seasons
            .iter()
            .filter(|s| s.name == SeasonName::NativityFast)
            .collect();
        assert_eq!(nativities.len(), 2);
        assert_eq!(nativities[0].start, g(2025, 11, 25));
        assert_eq!(nativities[0].end, g(2026, 1, 6));
        assert_eq!(nativities[1].start, g(2024, 11, 25));
        assert_eq!(nativities[1].end, g(2025, 1, 6));
    }

    #[test]
    fn ordinary_time_is_none() {
        assert_eq!(liturgical_season_for_date(g(2025, 8, 20)), None);
        assert!(!is_in_fasting_period(g(2025, 8, 20)));
    }

    #[test]
    fn paschal_season_reported_but_not_fasting() {
        let s = liturgical_season_for_date(g(2025, 5, 1)).unwrap();
        assert_eq!(s.name, SeasonName::PaschalSeason);
        assert!(!s.fasting);
        assert!(!is_in_fasting_period(g(2025, 5, 1)));
    }

    #[test]
    fn fasting_periods_exclude_paschal_season() {
        let fasting = fasting_periods_for_year(2025);
        assert!(fasting.iter().all(|s| s.fasting));
        assert!(!fasting.iter().any(|s| s.name == SeasonName::PaschalSeason));
    }
}
