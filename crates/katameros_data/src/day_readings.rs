//! The Katameros day tables: per-month reading IDs and celebration IDs,
//! plus the reading records the IDs point into.

use serde::{Deserialize, Serialize};

/// One Coptic month's day table. `readings[day - 1]` is the reading ID
/// for that day; `days_with_celebrations[day - 1]` the celebration(s).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonthReadings {
    pub month: u32,
    pub name: String,
    pub readings: Vec<i64>,
    #[serde(rename = "daysWithCelebrations", default)]
    pub days_with_celebrations: Vec<CelebrationRef>,
}

/// Celebration slot for one day: the dataset stores `0` for none, a bare
/// ID, or an array of IDs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CelebrationRef {
    One(i64),
    Many(Vec<i64>),
}

impl CelebrationRef {
    /// Celebration IDs in this slot; the `0` sentinel yields none.
    pub fn ids(&self) -> Vec<i64> {
        match self {
            Self::One(0) => Vec::new(),
            Self::One(id) => vec![*id],
            Self::Many(ids) => ids.iter().copied().filter(|&id| id != 0).collect(),
        }
    }
}

/// A reading record: raw verse-reference strings for the nine services
/// of one lectionary day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReadingRecord {
    pub id: i64,
    #[serde(rename = "Day", default)]
    pub day: Option<String>,
    #[serde(rename = "VPsalm")]
    pub v_psalm: String,
    #[serde(rename = "VGospel")]
    pub v_gospel: String,
    #[serde(rename = "MPsalm")]
    pub m_psalm: String,
    #[serde(rename = "MGospel")]
    pub m_gospel: String,
    #[serde(rename = "Pauline")]
    pub pauline: String,
    #[serde(rename = "Catholic")]
    pub catholic: String,
    #[serde(rename = "Acts")]
    pub acts: String,
    #[serde(rename = "LPsalm")]
    pub l_psalm: String,
    #[serde(rename = "LGospel")]
    pub l_gospel: String,
}
