//! Report run use case
//!
//! Reads the log and synonym files, parses and normalizes the entries, and
//! loads them into a fresh [`RecordStore`] ready for reporting.

use crate::domain::{Diagnostic, LogParser, NormalizedRecord, ParsedLog, SynonymTable};
use crate::error::Result;
use crate::infrastructure::{
    DayCategoryTotal, DayCommentHours, FileSystemRepository, LogRepository, RecordStore,
    WeekCategoryTotal,
};
use clap::ValueEnum;
use std::path::PathBuf;

/// Which report(s) to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Every loaded row
    All,
    /// Minutes per day and category
    Day,
    /// Minutes per week and category
    Week,
    /// Hours per day and comment for the work category
    Work,
    /// All four reports, in order
    Every,
}

impl ReportKind {
    /// The single reports this kind expands to, in print order
    pub fn expand(self) -> Vec<ReportKind> {
        match self {
            ReportKind::Every => vec![
                ReportKind::All,
                ReportKind::Day,
                ReportKind::Week,
                ReportKind::Work,
            ],
            single => vec![single],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::All => "all rows",
            ReportKind::Day => "by day and category",
            ReportKind::Week => "by week and category",
            ReportKind::Work => "work hours by day and comment",
            ReportKind::Every => "every report",
        }
    }
}

/// Overrides for values otherwise taken from the config file
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub data_file: Option<PathBuf>,
    pub synonyms_file: Option<PathBuf>,
    pub work_category: Option<String>,
}

/// Rows of one report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRows {
    All(Vec<NormalizedRecord>),
    Day(Vec<DayCategoryTotal>),
    Week(Vec<WeekCategoryTotal>),
    Work(Vec<DayCommentHours>),
}

/// A parsed log waiting to be loaded into a store
#[derive(Debug, Clone)]
pub struct ParsedRun {
    pub log: ParsedLog,
    pub synonyms: SynonymTable,
    pub work_category: String,
}

impl ParsedRun {
    pub fn parse(log_text: &str, synonyms: SynonymTable, work_category: &str) -> Self {
        ParsedRun {
            log: LogParser::parse(log_text),
            synonyms,
            work_category: work_category.to_string(),
        }
    }

    /// Lines skipped while parsing. Available even if loading later fails.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.log.diagnostics
    }

    /// Normalize the parsed entries and load them into a fresh store.
    pub fn load(self) -> Result<ReportRun> {
        let store = RecordStore::from_log(&self.log, &self.synonyms)?;

        Ok(ReportRun {
            store,
            diagnostics: self.log.diagnostics,
            work_category: self.work_category,
        })
    }
}

/// A loaded store plus everything skipped while building it
#[derive(Debug, Clone)]
pub struct ReportRun {
    pub store: RecordStore,
    pub diagnostics: Vec<Diagnostic>,
    pub work_category: String,
}

impl ReportRun {
    /// Parse `log_text`, normalize it through `synonyms` and load the store.
    pub fn build(log_text: &str, synonyms: &SynonymTable, work_category: &str) -> Result<Self> {
        ParsedRun::parse(log_text, synonyms.clone(), work_category).load()
    }

    /// Rows of a single report. [`ReportKind::Every`] yields the full rows
    /// report; use [`ReportKind::expand`] to get all four.
    pub fn rows(&self, kind: ReportKind) -> ReportRows {
        match kind {
            ReportKind::All | ReportKind::Every => {
                ReportRows::All(self.store.all_rows().to_vec())
            }
            ReportKind::Day => ReportRows::Day(self.store.totals_by_day_category()),
            ReportKind::Week => ReportRows::Week(self.store.totals_by_week_category()),
            ReportKind::Work => {
                ReportRows::Work(self.store.hours_by_day_comment(&self.work_category))
            }
        }
    }
}

/// Service for building a report run from files
pub struct RunReportsService {
    repository: FileSystemRepository,
}

impl RunReportsService {
    /// Create a new run reports service
    pub fn new(repository: FileSystemRepository) -> Self {
        RunReportsService { repository }
    }

    /// Read and parse the inputs without loading them
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file is malformed
    /// - The log file is missing or unreadable
    pub fn prepare(&self, options: RunOptions) -> Result<ParsedRun> {
        // 1. Merge config file with overrides
        let config = self.repository.load_config()?;
        let data_file = options.data_file.unwrap_or(config.data_file);
        let synonyms_file = options.synonyms_file.unwrap_or(config.synonyms_file);
        let work_category = options.work_category.unwrap_or(config.work_category);

        // 2. Read inputs
        let log_text = self.repository.read_log(&data_file)?;
        let synonyms = match self.repository.read_synonyms(&synonyms_file)? {
            Some(text) => SynonymTable::parse(&text),
            None => SynonymTable::new(),
        };

        tracing::debug!(
            data = %data_file.display(),
            synonyms = synonyms.len(),
            "running reports"
        );

        // 3. Parse
        Ok(ParsedRun::parse(&log_text, synonyms, &work_category))
    }

    /// Execute the whole pipeline
    ///
    /// # Errors
    ///
    /// Everything [`prepare`](Self::prepare) rejects, plus a day header
    /// naming a date that does not exist.
    pub fn execute(&self, options: RunOptions) -> Result<ReportRun> {
        self.prepare(options)?.load()
    }
}
