//! Raw synaxarium dataset: daily saint commemorations keyed by
//! `"<day> <MonthName>"`.

use std::collections::BTreeMap;

use coptic_time::CopticDate;
use serde::{Deserialize, Serialize};

/// One commemoration as stored in the raw dataset. Entries without a
/// name exist in the data and are skipped by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SynaxariumEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The full synaxarium: date key → commemorations for that day.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Synaxarium {
    pub days: BTreeMap<String, Vec<SynaxariumEntry>>,
}

impl Synaxarium {
    /// Commemorations for a Coptic date, empty when the key is absent.
    pub fn entries_for(&self, date: CopticDate) -> &[SynaxariumEntry] {
        self.days
            .get(&date.date_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
