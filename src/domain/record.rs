//! Normalized records and the date/number conventions used by reports

use super::day::{DayHeader, Entry};
use super::synonyms::SynonymTable;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};

/// One entry after synonym normalization, keyed by its calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub date: NaiveDate,
    pub category: String,
    pub minutes: i64,
    pub comment: String,
}

impl NormalizedRecord {
    /// Build a record from a parsed entry, normalizing category and comment
    /// independently.
    pub fn from_entry(header: &DayHeader, entry: &Entry, synonyms: &SynonymTable) -> Result<Self> {
        Ok(NormalizedRecord {
            date: header.date()?,
            category: synonyms.normalize(&entry.category).to_string(),
            minutes: entry.minutes,
            comment: synonyms.normalize(&entry.comment).to_string(),
        })
    }
}

/// Week of the year, Monday-based.
///
/// Week 1 starts on the first Monday of the year; days before it fall in
/// week 0. Matches strftime's `%W`.
pub fn week_of_year(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_monday()) / 7
}

/// Minutes as hours, truncated (floored) to two decimal places.
pub fn truncated_hours(minutes: i64) -> f64 {
    (i128::from(minutes) * 100).div_euclid(60) as f64 / 100.0
}
