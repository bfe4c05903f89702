//! Bible verse-text store: books → chapters → verses.

use serde::{Deserialize, Serialize};

/// The whole verse-text store for one translation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bible {
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Book {
    pub name: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chapter {
    pub num: u32,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Verse {
    pub num: u32,
    pub text: String,
}

impl Bible {
    /// Book by exact name match.
    pub fn book(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.name == name)
    }
}

impl Book {
    pub fn chapter(&self, num: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.num == num)
    }
}

impl Chapter {
    pub fn verse(&self, num: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.num == num)
    }
}
