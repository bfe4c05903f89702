//! Non-moveable (calendar-fixed) celebration metadata.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Celebration {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub story: Option<String>,
}

/// The celebrations table: `{ "celebrations": [...] }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CelebrationsTable {
    pub celebrations: Vec<Celebration>,
}

impl CelebrationsTable {
    pub fn by_id(&self, id: i64) -> Option<&Celebration> {
        self.celebrations.iter().find(|c| c.id == id)
    }
}
