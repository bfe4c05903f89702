//! Query behavior tests against a fixture synaxarium.

use katameros_data::Synaxarium;
use katameros_search::SynaxariumIndex;
use serde_json::json;

fn fixture_index() -> SynaxariumIndex {
    let synaxarium: Synaxarium = serde_json::from_value(json!({
        "21 Baba": [
            { "name": "Commemoration of St. Mary the Theotokos" }
        ],
        "15 Toba": [
            { "name": "Departure of St. Mary the Virgin", "url": "https://example.org/mary" },
            { "name": "Martyrdom of St. George of Cappadocia" }
        ],
        "23 Baramhat": [
            { "name": "Departure of St. George the New Martyr" },
            { "name": null }
        ]
    }))
    .unwrap();
    SynaxariumIndex::build(&synaxarium)
}

#[test]
fn build_skips_nameless_entries() {
    let index = fixture_index();
    assert_eq!(index.entries().len(), 4);
    assert!(index.word_count() > 0);
}

#[test]
fn single_word_lookup() {
    let index = fixture_index();
    let hits = index.search("mary", None);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|e| e.name_lower.contains("mary")));
}

#[test]
fn search_is_case_insensitive() {
    let index = fixture_index();
    assert_eq!(index.search("MARY", None).len(), 2);
}

#[test]
fn multi_word_query_intersects() {
    let index = fixture_index();
    let hits = index.search("mary virgin", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "15 Toba");
    assert_eq!(hits[0].day, 15);
    assert_eq!(hits[0].month_name, "Toba");
}

#[test]
fn results_follow_entry_order() {
    let index = fixture_index();
    let hits = index.search("george", None);
    assert_eq!(hits.len(), 2);
    let pos = |key: &str| {
        index
            .entries()
            .iter()
            .position(|e| e.key == key)
            .unwrap()
    };
    assert!(pos(&hits[0].key) < pos(&hits[1].key));
}

#[test]
fn unknown_token_falls_back_to_substring_scan() {
    // "mar" is no indexed word, but substring matching still finds
    // Mary and Martyr entries
    let index = fixture_index();
    let hits = index.search("mar", None);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|e| e.name_lower.contains("mar")));
}

#[test]
fn no_match_returns_empty() {
    let index = fixture_index();
    assert!(index.search("xyz-no-such-saint", None).is_empty());
}

#[test]
fn short_or_empty_queries_return_empty() {
    let index = fixture_index();
    assert!(index.search("", None).is_empty());
    assert!(index.search("   ", None).is_empty());
    assert!(index.search("of", None).is_empty());
}

#[test]
fn limit_truncates() {
    let index = fixture_index();
    assert_eq!(index.search("departure", Some(1)).len(), 1);
    assert_eq!(index.search("departure", None).len(), 2);
}

#[test]
fn entries_for_date_filters_by_key() {
    let index = fixture_index();
    let date = coptic_time::CopticDate::new(1741, 5, 15).unwrap();
    let hits = index.entries_for_date(date);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|e| e.key == "15 Toba"));
}

#[test]
fn repeated_queries_are_structurally_equal() {
    let index = fixture_index();
    assert_eq!(index.search("mary", None), index.search("mary", None));
}
