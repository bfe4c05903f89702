//! Word index build and query over synaxarium commemorations.

use std::collections::{HashMap, HashSet};

use coptic_time::CopticDate;
use katameros_data::Synaxarium;
use log::debug;

/// Tokens shorter than this never enter the index or a query.
const MIN_TOKEN_LEN: usize = 3;

/// One commemoration, flattened for searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    /// Date key, e.g. `"15 Toba"`.
    pub key: String,
    pub day: u32,
    pub month_name: String,
    pub name: String,
    pub name_lower: String,
    pub url: Option<String>,
}

/// Immutable word index over the synaxarium, built once per dataset
/// version and shared read-only thereafter.
#[derive(Debug, Clone)]
pub struct SynaxariumIndex {
    entries: Vec<IndexedEntry>,
    word_index: HashMap<String, Vec<usize>>,
}

impl SynaxariumIndex {
    /// Flatten every named commemoration and index its name tokens.
    pub fn build(synaxarium: &Synaxarium) -> Self {
        let mut entries = Vec::new();
        let mut word_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (key, day_entries) in &synaxarium.days {
            let (day, month_name) = split_date_key(key);
            for entry in day_entries {
                let Some(name) = entry.name.as_deref() else {
                    continue;
                };
                let position = entries.len();
                entries.push(IndexedEntry {
                    key: key.clone(),
                    day,
                    month_name: month_name.clone(),
                    name: name.to_string(),
                    name_lower: name.to_lowercase(),
                    url: entry.url.clone(),
                });
                for word in tokenize(name) {
                    word_index.entry(word).or_default().push(position);
                }
            }
        }

        debug!(
            "indexed {} synaxarium entries, {} unique words",
            entries.len(),
            word_index.len()
        );
        Self {
            entries,
            word_index,
        }
    }

    /// Free-text search over commemoration names.
    ///
    /// All query tokens found in the index: intersect their entry sets,
    /// ordered by entry position. Any token absent: fall back to a full
    /// substring scan so partial words and transliteration variants
    /// still match. Never errors; empty query yields empty results.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<&IndexedEntry> {
        let query_lower = query.trim().to_lowercase();
        let tokens = tokenize(&query_lower);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut per_token: Vec<&[usize]> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.word_index.get(token) {
                Some(positions) => per_token.push(positions),
                None => return self.substring_scan(&query_lower, limit),
            }
        }

        let mut hits: Vec<usize> = per_token[0].to_vec();
        for positions in &per_token[1..] {
            let set: HashSet<usize> = positions.iter().copied().collect();
            hits.retain(|p| set.contains(p));
        }
        hits.sort_unstable();
        hits.dedup();

        let take = limit.unwrap_or(hits.len());
        hits.into_iter()
            .take(take)
            .map(|p| &self.entries[p])
            .collect()
    }

    /// O(n) fallback: substring match over lowercased names.
    fn substring_scan(&self, query_lower: &str, limit: Option<usize>) -> Vec<&IndexedEntry> {
        let take = limit.unwrap_or(self.entries.len());
        self.entries
            .iter()
            .filter(|e| e.name_lower.contains(query_lower))
            .take(take)
            .collect()
    }

    /// Commemorations for one Coptic date, in entry order.
    pub fn entries_for_date(&self, date: CopticDate) -> Vec<&IndexedEntry> {
        let key = date.date_key();
        self.entries.iter().filter(|e| e.key == key).collect()
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn word_count(&self) -> usize {
        self.word_index.len()
    }
}

/// Lowercase, split on whitespace, strip non-alphabetic characters, and
/// drop tokens shorter than [`MIN_TOKEN_LEN`].
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect::<String>()
        })
        .filter(|word| word.len() >= MIN_TOKEN_LEN)
        .collect()
}

/// Split `"15 Toba"` into `(15, "Toba")`; malformed keys degrade to day 0.
fn split_date_key(key: &str) -> (u32, String) {
    match key.split_once(' ') {
        Some((day, month)) => (day.parse().unwrap_or(0), month.to_string()),
        None => (0, String::new()),
    }
}
