//! Verse-reference string parsing.
//!
//! Raw lectionary strings like `"John 3:16-21"`, `"Psalm 23"`, or
//! `"1 Corinthians 13:4"` are classified by an ordered list of matchers
//! tried in fixed precedence: verse range, single verse, whole chapter.
//! Splitting is always from the right (last space, last colon, last
//! hyphen) so multi-word book names stay intact.

/// A parsed verse reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseRef {
    /// `"<Book> <chapter>:<first>-<last>"`, inclusive.
    Range {
        book: String,
        chapter: u32,
        first: u32,
        last: u32,
    },
    /// `"<Book> <chapter>:<verse>"`.
    Single {
        book: String,
        chapter: u32,
        verse: u32,
    },
    /// `"<Book> <chapter>"`.
    Chapter { book: String, chapter: u32 },
}

impl VerseRef {
    pub fn book(&self) -> &str {
        match self {
            Self::Range { book, .. } | Self::Single { book, .. } | Self::Chapter { book, .. } => {
                book
            }
        }
    }
}

/// Parse one reference, trying each matcher in precedence order.
///
/// Returns `None` for strings matching no pattern; callers drop these
/// and keep going (partial failure never aborts a reading set).
pub fn parse_reference(input: &str) -> Option<VerseRef> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    parse_range(input)
        .or_else(|| parse_single(input))
        .or_else(|| parse_chapter(input))
}

fn parse_range(input: &str) -> Option<VerseRef> {
    let (head, tail) = input.rsplit_once(':')?;
    let (first, last) = tail.rsplit_once('-')?;
    let (book, chapter) = split_book_chapter(head)?;
    Some(VerseRef::Range {
        book,
        chapter,
        first: parse_num(first)?,
        last: parse_num(last)?,
    })
}

fn parse_single(input: &str) -> Option<VerseRef> {
    let (head, tail) = input.rsplit_once(':')?;
    let (book, chapter) = split_book_chapter(head)?;
    Some(VerseRef::Single {
        book,
        chapter,
        verse: parse_num(tail)?,
    })
}

fn parse_chapter(input: &str) -> Option<VerseRef> {
    let (book, chapter) = split_book_chapter(input)?;
    Some(VerseRef::Chapter { book, chapter })
}

/// Split `"1 Corinthians 13"` into `("1 Corinthians", 13)` at the last
/// space.
fn split_book_chapter(input: &str) -> Option<(String, u32)> {
    let (book, chapter) = input.rsplit_once(' ')?;
    let book = book.trim();
    if book.is_empty() {
        return None;
    }
    Some((book.to_string(), parse_num(chapter)?))
}

fn parse_num(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
