//! Reading resolution: Coptic date → raw reference strings → verse text.

use coptic_time::CopticDate;
use katameros_data::{Bible, Datasets, ReadingRecord, Verse};
use serde::Serialize;

use crate::error::ReadingsError;
use crate::reference::{VerseRef, parse_reference};

/// Resolved scripture text for one reference, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub book_name: String,
    pub chapters: Vec<ReadingChapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingChapter {
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

/// The nine services of a lectionary day, each either resolved readings
/// or absent when its raw string yielded nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReadingsBundle {
    pub vespers_psalm: Option<Vec<Reading>>,
    pub vespers_gospel: Option<Vec<Reading>>,
    pub matins_psalm: Option<Vec<Reading>>,
    pub matins_gospel: Option<Vec<Reading>>,
    pub pauline: Option<Vec<Reading>>,
    pub catholic: Option<Vec<Reading>>,
    pub acts: Option<Vec<Reading>>,
    pub liturgy_psalm: Option<Vec<Reading>>,
    pub liturgy_gospel: Option<Vec<Reading>>,
}

/// Resolve a parsed reference against the verse-text store.
///
/// A whole-chapter reference yields every verse of the chapter; a range
/// the inclusive `[first, last]` slice. Missing books, chapters, or
/// verses yield whatever subset exists, down to an empty list.
pub fn resolve_reference(bible: &Bible, reference: &VerseRef) -> Reading {
    let book_name = reference.book().to_string();
    let chapter_num = match reference {
        VerseRef::Range { chapter, .. }
        | VerseRef::Single { chapter, .. }
        | VerseRef::Chapter { chapter, .. } => *chapter,
    };

    let chapter = bible
        .book(&book_name)
        .and_then(|book| book.chapter(chapter_num));

    let verses: Vec<Verse> = match (reference, chapter) {
        (_, None) => Vec::new(),
        (VerseRef::Chapter { .. }, Some(ch)) => ch.verses.clone(),
        (VerseRef::Single { verse, .. }, Some(ch)) => {
            ch.verse(*verse).cloned().into_iter().collect()
        }
        (VerseRef::Range { first, last, .. }, Some(ch)) => (*first..=*last)
            .filter_map(|num| ch.verse(num).cloned())
            .collect(),
    };

    Reading {
        book_name,
        chapters: vec![ReadingChapter {
            chapter: chapter_num,
            verses,
        }],
    }
}

/// Parse a raw reading string, possibly semicolon-joined, and resolve
/// each piece. Unparseable pieces are dropped; `None` when nothing in
/// the string parsed.
pub fn parse_reading_string(bible: &Bible, raw: &str) -> Option<Vec<Reading>> {
    let readings: Vec<Reading> = raw
        .split(';')
        .filter_map(parse_reference)
        .map(|r| resolve_reference(bible, &r))
        .collect();
    if readings.is_empty() {
        None
    } else {
        Some(readings)
    }
}

/// Stage A: map a Coptic date to its reading record through the
/// day-readings table. Table gaps are fatal integrity errors.
pub fn raw_references_for_date(
    datasets: &Datasets,
    date: CopticDate,
) -> Result<&ReadingRecord, ReadingsError> {
    let month = datasets
        .month(date.month)
        .ok_or(ReadingsError::MonthNotFound(date.month))?;
    let not_found = ReadingsError::ReadingNotFound {
        month: date.month,
        day: date.day,
    };
    let reading_id = *month
        .readings
        .get((date.day - 1) as usize)
        .ok_or(not_found.clone())?;
    datasets.reading_record(reading_id).ok_or(not_found)
}

/// Stage A + B: the full resolved reading set for a Coptic date.
pub fn resolve_readings_for_date(
    datasets: &Datasets,
    date: CopticDate,
) -> Result<ReadingsBundle, ReadingsError> {
    let record = raw_references_for_date(datasets, date)?;
    let bible = datasets.bible();
    Ok(ReadingsBundle {
        vespers_psalm: parse_reading_string(bible, &record.v_psalm),
        vespers_gospel: parse_reading_string(bible, &record.v_gospel),
        matins_psalm: parse_reading_string(bible, &record.m_psalm),
        matins_gospel: parse_reading_string(bible, &record.m_gospel),
        pauline: parse_reading_string(bible, &record.pauline),
        catholic: parse_reading_string(bible, &record.catholic),
        acts: parse_reading_string(bible, &record.acts),
        liturgy_psalm: parse_reading_string(bible, &record.l_psalm),
        liturgy_gospel: parse_reading_string(bible, &record.l_gospel),
    })
}
