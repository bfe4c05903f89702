//! Read-only repository over the bundled liturgical reference datasets.
//!
//! This crate provides [`Datasets`], the explicitly constructed handle
//! that the calendar, readings, and search layers query. The four JSON
//! datasets (day-readings table, reading records, Bible text, celebration
//! metadata, raw synaxarium) are loaded once at startup and never mutated
//! afterwards, so a `Datasets` value is freely shareable across threads.

pub mod bible;
pub mod celebrations;
pub mod day_readings;
pub mod error;
pub mod synaxarium;

use std::path::PathBuf;

use coptic_time::CopticDate;
use log::{debug, info};

pub use bible::{Bible, Book, Chapter, Verse};
pub use celebrations::{Celebration, CelebrationsTable};
pub use day_readings::{CelebrationRef, MonthReadings, ReadingRecord};
pub use error::DataError;
pub use synaxarium::{Synaxarium, SynaxariumEntry};

/// Dataset file locations plus validation policy, used at startup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub day_readings_path: PathBuf,
    pub readings_path: PathBuf,
    pub bible_path: PathBuf,
    pub celebrations_path: PathBuf,
    pub synaxarium_path: PathBuf,
    pub strict_validation: bool,
}

impl DatasetConfig {
    fn validate(&self) -> Result<(), DataError> {
        let paths = [
            &self.day_readings_path,
            &self.readings_path,
            &self.bible_path,
            &self.celebrations_path,
            &self.synaxarium_path,
        ];
        if paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(DataError::InvalidConfig(
                "dataset paths must not be empty",
            ));
        }
        Ok(())
    }
}

/// The loaded, immutable reference datasets.
#[derive(Debug, Clone)]
pub struct Datasets {
    day_readings: Vec<MonthReadings>,
    readings: Vec<ReadingRecord>,
    bible: Bible,
    celebrations: CelebrationsTable,
    synaxarium: Synaxarium,
}

impl Datasets {
    /// Load all datasets from disk per the config.
    ///
    /// With `strict_validation` set, referential integrity is checked up
    /// front and any gap in the bundled data fails the load.
    pub fn load(config: &DatasetConfig) -> Result<Self, DataError> {
        config.validate()?;

        let day_readings = read_json(&config.day_readings_path)?;
        let readings = read_json(&config.readings_path)?;
        let bible = read_json(&config.bible_path)?;
        let celebrations = read_json(&config.celebrations_path)?;
        let synaxarium = read_json(&config.synaxarium_path)?;

        let datasets = Self::from_parts(day_readings, readings, bible, celebrations, synaxarium);
        if config.strict_validation {
            datasets.validate()?;
        }
        info!(
            "loaded datasets: {} months, {} reading records, {} books, {} celebrations, {} synaxarium days",
            datasets.day_readings.len(),
            datasets.readings.len(),
            datasets.bible.books.len(),
            datasets.celebrations.celebrations.len(),
            datasets.synaxarium.days.len(),
        );
        Ok(datasets)
    }

    /// Assemble a repository from already-deserialized parts.
    ///
    /// This is the fixture-injection seam for tests; call [`validate`]
    /// separately when integrity checking is wanted.
    ///
    /// [`validate`]: Datasets::validate
    pub fn from_parts(
        day_readings: Vec<MonthReadings>,
        readings: Vec<ReadingRecord>,
        bible: Bible,
        celebrations: CelebrationsTable,
        synaxarium: Synaxarium,
    ) -> Self {
        Self {
            day_readings,
            readings,
            bible,
            celebrations,
            synaxarium,
        }
    }

    /// Cross-dataset referential integrity check.
    ///
    /// Every reading ID must be non-negative and resolve to a reading
    /// record; every celebration ID must resolve in the celebrations
    /// table; months 1–12 must carry 30 day slots and Nasie at least 5.
    pub fn validate(&self) -> Result<(), DataError> {
        for month in &self.day_readings {
            let expected_days: std::ops::RangeInclusive<usize> = match month.month {
                1..=12 => 30..=30,
                13 => 5..=6,
                other => {
                    return Err(DataError::Integrity(format!(
                        "day-readings table has invalid month number {other}"
                    )));
                }
            };
            if !expected_days.contains(&month.readings.len()) {
                return Err(DataError::Integrity(format!(
                    "month {} ({}) has {} reading slots",
                    month.month,
                    month.name,
                    month.readings.len()
                )));
            }

            for (day_idx, &reading_id) in month.readings.iter().enumerate() {
                if reading_id < 0 {
                    return Err(DataError::Integrity(format!(
                        "negative reading ID {reading_id} at month {}, day {}",
                        month.month,
                        day_idx + 1
                    )));
                }
                if self.reading_record(reading_id).is_none() {
                    return Err(DataError::Integrity(format!(
                        "reading ID {reading_id} at month {}, day {} has no record",
                        month.month,
                        day_idx + 1
                    )));
                }
            }

            for (day_idx, slot) in month.days_with_celebrations.iter().enumerate() {
                for id in slot.ids() {
                    if self.celebrations.by_id(id).is_none() {
                        return Err(DataError::Integrity(format!(
                            "celebration ID {id} at month {}, day {} has no entry",
                            month.month,
                            day_idx + 1
                        )));
                    }
                }
            }
        }
        debug!("dataset validation passed");
        Ok(())
    }

    /// Day table for a Coptic month (1–13).
    pub fn month(&self, month: u32) -> Option<&MonthReadings> {
        self.day_readings.iter().find(|m| m.month == month)
    }

    /// Reading record by ID.
    pub fn reading_record(&self, id: i64) -> Option<&ReadingRecord> {
        self.readings.iter().find(|r| r.id == id)
    }

    pub fn bible(&self) -> &Bible {
        &self.bible
    }

    pub fn synaxarium(&self) -> &Synaxarium {
        &self.synaxarium
    }

    pub fn celebrations(&self) -> &CelebrationsTable {
        &self.celebrations
    }

    /// Fixed celebrations for a Coptic date, resolved against the
    /// celebrations table. Missing month tables are integrity faults.
    pub fn celebrations_for_date(
        &self,
        date: CopticDate,
    ) -> Result<Vec<&Celebration>, DataError> {
        let month = self.month(date.month).ok_or_else(|| {
            DataError::Integrity(format!("no day table for Coptic month {}", date.month))
        })?;
        let Some(slot) = month.days_with_celebrations.get((date.day - 1) as usize) else {
            return Ok(Vec::new());
        };
        Ok(slot
            .ids()
            .into_iter()
            .filter_map(|id| self.celebrations.by_id(id))
            .collect())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T, DataError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DataError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(|e| DataError::Parse(format!("{}: {e}", path.display())))
}
