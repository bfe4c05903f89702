//! Liturgical calendar computation: Paschal computus, moveable feasts,
//! and priority-ordered season classification.
//!
//! This crate provides:
//! - `easter_date`: the Gregorian date of Orthodox (Alexandrian) Easter
//! - The moveable-feast table offset from Easter
//! - Season windows for a year and classification of arbitrary dates,
//!   with fixed priority tie-breaks for overlapping windows
//!
//! Everything is pure arithmetic over `coptic_time` dates; no I/O and no
//! shared mutable state, so all functions are freely callable from
//! concurrent contexts.

pub mod moveable;
pub mod pascha;
pub mod season_types;
pub mod seasons;

pub use moveable::{
    FeastKind, MoveableFeast, is_in_moveable_fast, moveable_feasts_for_date,
    moveable_feasts_for_year,
};
pub use pascha::{easter_date, is_easter_sunday};
pub use season_types::{SeasonKind, SeasonName, SeasonWindow};
pub use seasons::{
    fasting_periods_for_year, is_in_fasting_period, liturgical_season_for_date,
    season_calendar_for_year,
};
