//! Daily scripture reading resolution for the Katameros lectionary.
//!
//! Two-stage pipeline: a Coptic date indexes the day-readings table to a
//! record of raw reference strings (stage A), and each string is parsed
//! by ordered matchers and resolved against the Bible text store into
//! structured [`Reading`] records (stage B). Stage A faults are fatal
//! data-integrity errors; stage B recovers locally by dropping
//! unparseable sub-references.

pub mod error;
pub mod readings;
pub mod reference;

pub use error::ReadingsError;
pub use readings::{
    Reading, ReadingChapter, ReadingsBundle, parse_reading_string, raw_references_for_date,
    resolve_readings_for_date, resolve_reference,
};
pub use reference::{VerseRef, parse_reference};
