//! Convenience wrapper for the Coptic liturgical calendar engine.
//!
//! Bundles the loaded datasets and the prebuilt synaxarium index behind
//! one [`Katameros`] handle exposing the full public surface: date
//! conversion, the Paschal computus, season and fasting classification,
//! daily reading resolution, and commemoration search.
//!
//! The handle holds no hidden global state and nothing in it mutates
//! after construction, so one instance can serve unlimited concurrent
//! callers. A dataset update means building a new handle and swapping
//! it in, never mutating a live one.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use katameros_rs::{DatasetConfig, Katameros};
//!
//! let config = DatasetConfig {
//!     day_readings_path: "data/dayReadings.json".into(),
//!     readings_path: "data/uniqueReadings.json".into(),
//!     bible_path: "data/bible.json".into(),
//!     celebrations_path: "data/nonMoveableCelebrations.json".into(),
//!     synaxarium_path: "data/synaxarium.json".into(),
//!     strict_validation: true,
//! };
//! let engine = Katameros::load(&config)?;
//!
//! let today = coptic_time::GregorianDate::new(2025, 4, 15)?;
//! let season = engine.liturgical_season_for_date(today);
//! let readings = engine.resolve_readings_for_date(today)?;
//! let saints = engine.search_synaxarium("mary", Some(10));
//! ```

// Primary re-exports so callers only need `use katameros_rs::*`.
pub use coptic_liturgy::{
    FeastKind, MoveableFeast, SeasonKind, SeasonName, SeasonWindow, easter_date,
    is_easter_sunday,
};
pub use coptic_time::{COPTIC_MONTHS, CopticDate, DateError, GregorianDate, to_coptic, to_gregorian};
pub use katameros_data::{
    Bible, Book, Celebration, CelebrationsTable, Chapter, DataError, DatasetConfig, Datasets,
    MonthReadings, ReadingRecord, Synaxarium, SynaxariumEntry, Verse,
};
pub use katameros_readings::{
    Reading, ReadingChapter, ReadingsBundle, ReadingsError, VerseRef, parse_reference,
};
pub use katameros_search::{IndexedEntry, SynaxariumIndex};

/// Errors surfaced by the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KatamerosError {
    Date(DateError),
    Data(DataError),
    Readings(ReadingsError),
}

impl std::fmt::Display for KatamerosError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(e) => write!(f, "{e}"),
            Self::Data(e) => write!(f, "{e}"),
            Self::Readings(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for KatamerosError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date(e) => Some(e),
            Self::Data(e) => Some(e),
            Self::Readings(e) => Some(e),
        }
    }
}

impl From<DateError> for KatamerosError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}

impl From<DataError> for KatamerosError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}

impl From<ReadingsError> for KatamerosError {
    fn from(e: ReadingsError) -> Self {
        Self::Readings(e)
    }
}

/// The assembled engine: immutable datasets plus the prebuilt
/// commemoration index.
#[derive(Debug, Clone)]
pub struct Katameros {
    datasets: Datasets,
    index: SynaxariumIndex,
}

impl Katameros {
    /// Wrap already-loaded datasets, building the synaxarium index once.
    pub fn new(datasets: Datasets) -> Self {
        let index = SynaxariumIndex::build(datasets.synaxarium());
        Self { datasets, index }
    }

    /// Load datasets from disk and assemble the engine.
    pub fn load(config: &DatasetConfig) -> Result<Self, DataError> {
        Ok(Self::new(Datasets::load(config)?))
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    /// Gregorian → Coptic conversion.
    pub fn to_coptic(&self, date: GregorianDate) -> Result<CopticDate, DateError> {
        coptic_time::to_coptic(date)
    }

    /// Coptic → Gregorian conversion.
    pub fn to_gregorian(&self, date: CopticDate) -> GregorianDate {
        coptic_time::to_gregorian(date)
    }

    /// Gregorian date of Pascha for a year.
    pub fn easter_date(&self, year: i32) -> GregorianDate {
        coptic_liturgy::easter_date(year)
    }

    /// Priority-resolved liturgical season, `None` for Ordinary Time.
    pub fn liturgical_season_for_date(&self, date: GregorianDate) -> Option<SeasonWindow> {
        coptic_liturgy::liturgical_season_for_date(date)
    }

    /// Whether a date falls in any fasting period.
    pub fn is_in_fasting_period(&self, date: GregorianDate) -> bool {
        coptic_liturgy::is_in_fasting_period(date)
    }

    /// Moveable-fast classification only (fixed fasts excluded).
    pub fn is_in_moveable_fast(&self, date: GregorianDate) -> Option<MoveableFeast> {
        coptic_liturgy::is_in_moveable_fast(date)
    }

    /// Full season calendar for a year.
    pub fn all_seasons_for_year(&self, year: i32) -> Vec<SeasonWindow> {
        coptic_liturgy::season_calendar_for_year(year)
    }

    /// Fasting windows of a year's calendar.
    pub fn fasting_periods_for_year(&self, year: i32) -> Vec<SeasonWindow> {
        coptic_liturgy::fasting_periods_for_year(year)
    }

    /// Easter-anchored feast table for a year.
    pub fn moveable_feasts_for_year(&self, year: i32) -> Vec<MoveableFeast> {
        coptic_liturgy::moveable_feasts_for_year(year)
    }

    /// Resolved scripture readings for a Gregorian date.
    pub fn resolve_readings_for_date(
        &self,
        date: GregorianDate,
    ) -> Result<ReadingsBundle, KatamerosError> {
        let coptic = coptic_time::to_coptic(date)?;
        Ok(katameros_readings::resolve_readings_for_date(
            &self.datasets,
            coptic,
        )?)
    }

    /// Raw (unresolved) reference strings for a Gregorian date.
    pub fn raw_references_for_date(
        &self,
        date: GregorianDate,
    ) -> Result<ReadingRecord, KatamerosError> {
        let coptic = coptic_time::to_coptic(date)?;
        Ok(katameros_readings::raw_references_for_date(&self.datasets, coptic)?.clone())
    }

    /// Free-text commemoration search.
    pub fn search_synaxarium(&self, query: &str, limit: Option<usize>) -> Vec<&IndexedEntry> {
        self.index.search(query, limit)
    }

    /// Commemorations for a Gregorian date.
    pub fn synaxarium_for_date(
        &self,
        date: GregorianDate,
    ) -> Result<&[SynaxariumEntry], DateError> {
        let coptic = coptic_time::to_coptic(date)?;
        Ok(self.datasets.synaxarium().entries_for(coptic))
    }

    /// Fixed celebrations for a Gregorian date.
    pub fn celebrations_for_date(
        &self,
        date: GregorianDate,
    ) -> Result<Vec<&Celebration>, KatamerosError> {
        let coptic = coptic_time::to_coptic(date)?;
        Ok(self.datasets.celebrations_for_date(coptic)?)
    }
}
