//! End-to-end tests driving the whole engine through the `Katameros`
//! handle with small in-memory fixture datasets.

use katameros_rs::{
    Bible, CelebrationsTable, GregorianDate, Katameros, MonthReadings, ReadingRecord, SeasonName,
    Synaxarium,
};
use serde_json::json;

fn fixture_engine() -> Katameros {
    let day_readings: Vec<MonthReadings> = serde_json::from_value(json!([{
        "month": 1,
        "name": "Tout",
        "readings": (0..30).map(|_| 7).collect::<Vec<i64>>(),
        "daysWithCelebrations": [3001]
    }]))
    .unwrap();
    let readings: Vec<ReadingRecord> = serde_json::from_value(json!([{
        "id": 7,
        "VPsalm": "Psalms 1", "VGospel": "John 1:1-3",
        "MPsalm": "Psalms 1", "MGospel": "John 1:1-3",
        "Pauline": "John 1:2", "Catholic": "not a reference",
        "Acts": "John 1:1-3", "LPsalm": "Psalms 1", "LGospel": "John 1"
    }]))
    .unwrap();
    let bible: Bible = serde_json::from_value(json!({
        "books": [
            {
                "name": "Psalms",
                "chapters": [{
                    "num": 1,
                    "verses": [
                        { "num": 1, "text": "Blessed is the man" },
                        { "num": 2, "text": "But his delight" }
                    ]
                }]
            },
            {
                "name": "John",
                "chapters": [{
                    "num": 1,
                    "verses": [
                        { "num": 1, "text": "In the beginning was the Word" },
                        { "num": 2, "text": "The same was in the beginning" },
                        { "num": 3, "text": "All things were made by him" }
                    ]
                }]
            }
        ]
    }))
    .unwrap();
    let celebrations: CelebrationsTable = serde_json::from_value(json!({
        "celebrations": [
            { "id": 3001, "name": "Feast of El-Nayrouz", "type": "majorFeast" }
        ]
    }))
    .unwrap();
    let synaxarium: Synaxarium = serde_json::from_value(json!({
        "1 Tout": [
            { "name": "Commemoration of St. Bashouna the Martyr", "url": "" }
        ]
    }))
    .unwrap();

    let datasets = katameros_rs::Datasets::from_parts(
        day_readings,
        readings,
        bible,
        celebrations,
        synaxarium,
    );
    datasets.validate().unwrap();
    Katameros::new(datasets)
}

#[test]
fn conversions_round_trip_through_handle() {
    let engine = fixture_engine();
    let greg = GregorianDate::new(2025, 9, 11).unwrap();
    let coptic = engine.to_coptic(greg).unwrap();
    assert_eq!((coptic.year, coptic.month, coptic.day), (1742, 1, 1));
    assert_eq!(engine.to_gregorian(coptic), greg);
}

#[test]
fn easter_and_season_queries_agree() {
    let engine = fixture_engine();
    assert_eq!(
        engine.easter_date(2025),
        GregorianDate::new(2025, 4, 20).unwrap()
    );

    let holy_tuesday = GregorianDate::new(2025, 4, 15).unwrap();
    let season = engine.liturgical_season_for_date(holy_tuesday).unwrap();
    assert_eq!(season.name, SeasonName::HolyWeek);
    assert!(engine.is_in_fasting_period(holy_tuesday));
    assert!(engine.is_in_moveable_fast(holy_tuesday).is_some());
}

#[test]
fn year_calendars_are_consistent() {
    let engine = fixture_engine();
    let seasons = engine.all_seasons_for_year(2025);
    let fasting = engine.fasting_periods_for_year(2025);
    assert!(fasting.len() < seasons.len());
    assert!(fasting.iter().all(|w| w.fasting));

    let feasts = engine.moveable_feasts_for_year(2025);
    let easter = feasts
        .iter()
        .find(|f| f.days_from_easter == 0)
        .expect("Easter missing from feast table");
    assert_eq!(easter.date, GregorianDate::new(2025, 4, 20).unwrap());
}

#[test]
fn readings_resolve_for_gregorian_date() {
    let engine = fixture_engine();
    let nayrouz = GregorianDate::new(2025, 9, 11).unwrap();

    let bundle = engine.resolve_readings_for_date(nayrouz).unwrap();
    let gospel = bundle.matins_gospel.unwrap();
    assert_eq!(gospel.len(), 1);
    assert_eq!(gospel[0].book_name, "John");
    assert_eq!(gospel[0].chapters[0].verses.len(), 3);

    // Unparseable reference strings drop out rather than failing the day.
    assert!(bundle.catholic.is_none());

    let record = engine.raw_references_for_date(nayrouz).unwrap();
    assert_eq!(record.catholic, "not a reference");
}

#[test]
fn synaxarium_and_celebrations_by_gregorian_date() {
    let engine = fixture_engine();
    let nayrouz = GregorianDate::new(2025, 9, 11).unwrap();

    let entries = engine.synaxarium_for_date(nayrouz).unwrap();
    assert_eq!(entries.len(), 1);

    let celebrations = engine.celebrations_for_date(nayrouz).unwrap();
    assert_eq!(celebrations.len(), 1);
    assert_eq!(celebrations[0].name, "Feast of El-Nayrouz");

    // A day with no commemorations yields empty results, not errors.
    let quiet = GregorianDate::new(2025, 9, 12).unwrap();
    assert!(engine.synaxarium_for_date(quiet).unwrap().is_empty());
    assert!(engine.celebrations_for_date(quiet).unwrap().is_empty());
}

#[test]
fn search_is_wired_to_index() {
    let engine = fixture_engine();
    let hits = engine.search_synaxarium("bashouna", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "1 Tout");

    assert!(engine.search_synaxarium("nonexistent", None).is_empty());
}

#[test]
fn handle_construction_from_parts_has_no_global_state() {
    // Two independent handles must not interfere.
    let a = fixture_engine();
    let b = fixture_engine();
    let date = GregorianDate::new(2025, 9, 11).unwrap();
    assert_eq!(
        a.to_coptic(date).unwrap(),
        b.to_coptic(date).unwrap()
    );
}
