//! In-memory record table and the fixed aggregate reports run over it

use crate::domain::{truncated_hours, week_of_year, NormalizedRecord, ParsedLog, SynonymTable};
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Category label whose entries feed the per-comment hours report.
pub const WORK_CATEGORY: &str = "工作";

/// Minutes summed per (date, category). Sums saturate at the `i64` bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCategoryTotal {
    pub date: NaiveDate,
    pub category: String,
    pub minutes: i64,
}

/// Minutes summed per (week of year, category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekCategoryTotal {
    pub week: u32,
    pub category: String,
    pub minutes: i64,
}

/// Hours spent per (date, comment) within a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCommentHours {
    pub date: NaiveDate,
    pub comment: String,
    pub hours: f64,
}

/// Table of normalized records, rebuilt from scratch on every load.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    rows: Vec<NormalizedRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the normalized records of `log`.
    pub fn from_log(log: &ParsedLog, synonyms: &SynonymTable) -> Result<Self> {
        let mut store = Self::new();
        store.load(log, synonyms)?;
        Ok(store)
    }

    /// Replace the store contents with the normalized records of `log`.
    ///
    /// Fails on a day header whose date does not exist; the store is left
    /// empty in that case.
    pub fn load(&mut self, log: &ParsedLog, synonyms: &SynonymTable) -> Result<()> {
        self.clear();
        for day in &log.days {
            for entry in &day.entries {
                match NormalizedRecord::from_entry(&day.header, entry, synonyms) {
                    Ok(record) => self.insert(record),
                    Err(e) => {
                        self.clear();
                        return Err(e);
                    }
                }
            }
        }
        tracing::debug!(rows = self.rows.len(), "record store loaded");
        Ok(())
    }

    pub fn insert(&mut self, record: NormalizedRecord) {
        self.rows.push(record);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row, unaggregated, in load order.
    pub fn all_rows(&self) -> &[NormalizedRecord] {
        &self.rows
    }

    /// Total minutes per (date, category), ordered by date then category.
    pub fn totals_by_day_category(&self) -> Vec<DayCategoryTotal> {
        let mut groups: BTreeMap<(NaiveDate, &str), i64> = BTreeMap::new();
        for row in &self.rows {
            let total = groups.entry((row.date, row.category.as_str())).or_default();
            *total = total.saturating_add(row.minutes);
        }

        groups
            .into_iter()
            .map(|((date, category), minutes)| DayCategoryTotal {
                date,
                category: category.to_string(),
                minutes,
            })
            .collect()
    }

    /// Total minutes per (week of year, category), ordered by week then
    /// category. Weeks are numbered with [`week_of_year`], so the same week
    /// number in different years shares a group.
    pub fn totals_by_week_category(&self) -> Vec<WeekCategoryTotal> {
        let mut groups: BTreeMap<(u32, &str), i64> = BTreeMap::new();
        for row in &self.rows {
            let total = groups
                .entry((week_of_year(row.date), row.category.as_str()))
                .or_default();
            *total = total.saturating_add(row.minutes);
        }

        groups
            .into_iter()
            .map(|((week, category), minutes)| WeekCategoryTotal {
                week,
                category: category.to_string(),
                minutes,
            })
            .collect()
    }

    /// Hours per (date, comment) for rows in `category`, truncated to two
    /// decimals, ordered by date then comment.
    pub fn hours_by_day_comment(&self, category: &str) -> Vec<DayCommentHours> {
        let mut groups: BTreeMap<(NaiveDate, &str), i64> = BTreeMap::new();
        for row in self.rows.iter().filter(|r| r.category == category) {
            let total = groups.entry((row.date, row.comment.as_str())).or_default();
            *total = total.saturating_add(row.minutes);
        }

        groups
            .into_iter()
            .map(|((date, comment), minutes)| DayCommentHours {
                date,
                comment: comment.to_string(),
                hours: truncated_hours(minutes),
            })
            .collect()
    }

    /// [`hours_by_day_comment`](Self::hours_by_day_comment) for [`WORK_CATEGORY`].
    pub fn work_hours_by_day_comment(&self) -> Vec<DayCommentHours> {
        self.hours_by_day_comment(WORK_CATEGORY)
    }
}
