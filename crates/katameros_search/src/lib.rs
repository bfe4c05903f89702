//! Saint-commemoration search engine over the synaxarium.
//!
//! This crate provides:
//! - An offline build phase flattening commemorations into a word index
//! - Online multi-word queries answered by index intersection
//! - A substring-scan fallback for partial words and transliteration
//!   variants the index cannot see
//!
//! The built [`SynaxariumIndex`] is immutable; dataset updates build a
//! fresh index and swap it in rather than mutating a live one.

pub mod index;

pub use index::{IndexedEntry, SynaxariumIndex};
