//! Line-oriented parser for the time-tracking log
//!
//! The log is a sequence of day headers, each followed by entries of the form
//! `category duration [# comment]`:
//!
//! ```text
//! 2024.1.15 Mon.
//! 工作 1 # coding
//! 工作 0.30
//! 运动 45min # running
//! ```
//!
//! Malformed lines are skipped and reported as [`Diagnostic`]s; parsing never
//! stops on a bad line.

use super::day::{DayHeader, Entry, WeekdayLabel};
use super::duration::parse_duration;
use regex::Regex;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Regex for day headers: `2024.1.15 Mon.`
fn day_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{4})\.([0-9]{1,2})\.([0-9]{1,2}) (Mon\.|Tues\.|Weds\.|Thur\.|Fri\.|Sat\.|Sun\.)$")
            .unwrap()
    })
}

/// Parse a trimmed line as a day header.
fn parse_day_header(line: &str) -> Option<DayHeader> {
    let caps = day_header_regex().captures(line)?;
    Some(DayHeader::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
        WeekdayLabel::from_str(&caps[4]).ok()?,
    ))
}

/// Why a line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineIssue {
    #[error("no day")]
    NoActiveDay,

    #[error("invalid syntax")]
    InvalidSyntax,

    #[error("no comment")]
    MissingComment,

    #[error("invalid time string")]
    InvalidDuration,
}

/// A skipped line, with enough context to find it in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the log text
    pub line_number: usize,
    /// The line with surrounding whitespace removed
    pub line: String,
    /// Header of the day being parsed, if any
    pub day: Option<DayHeader>,
    pub issue: LineIssue,
}

/// A day and the entries logged under it, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLog {
    pub header: DayHeader,
    pub entries: Vec<Entry>,
}

/// Result of parsing a whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Days in order of first appearance. Only days with at least one entry
    /// are present; a header repeated later in the file adds to the same day.
    pub days: Vec<DayLog>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedLog {
    /// Entries logged under `header`, if any.
    pub fn entries_for(&self, header: &DayHeader) -> Option<&[Entry]> {
        self.days
            .iter()
            .find(|d| &d.header == header)
            .map(|d| d.entries.as_slice())
    }

    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }
}

/// Category and comment of the last entry accepted for the current day.
#[derive(Debug, Clone)]
struct LastEntry {
    category: String,
    comment: String,
}

/// Parsing state for one pass over a log.
struct ParseSession {
    current_day: Option<DayHeader>,
    last_entry: Option<LastEntry>,
    day_index: HashMap<DayHeader, usize>,
    output: ParsedLog,
}

impl ParseSession {
    fn new() -> Self {
        Self {
            current_day: None,
            last_entry: None,
            day_index: HashMap::new(),
            output: ParsedLog::default(),
        }
    }

    fn process_line(&mut self, line_number: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if let Some(header) = parse_day_header(line) {
            tracing::debug!(day = %header, "day header");
            self.current_day = Some(header);
            self.last_entry = None;
            return;
        }

        let Some(day) = self.current_day.clone() else {
            self.report(line_number, line, LineIssue::NoActiveDay);
            return;
        };

        match self.parse_entry(line) {
            Ok(entry) => {
                self.last_entry = Some(LastEntry {
                    category: entry.category.clone(),
                    comment: entry.comment.clone(),
                });
                self.push_entry(day, entry);
            }
            Err(issue) => self.report(line_number, line, issue),
        }
    }

    fn parse_entry(&self, line: &str) -> Result<Entry, LineIssue> {
        let (body, inline_comment) = match line.split_once('#') {
            Some((body, rest)) => (body, Some(rest.trim())),
            None => (line, None),
        };

        let tokens: Vec<&str> = body.split_whitespace().collect();
        let [category, duration] = tokens.as_slice() else {
            return Err(LineIssue::InvalidSyntax);
        };

        // An empty inline comment counts as no comment at all.
        let comment = match inline_comment.filter(|c| !c.is_empty()) {
            Some(comment) => comment.to_string(),
            None => match &self.last_entry {
                Some(last) if last.category == *category => last.comment.clone(),
                _ => return Err(LineIssue::MissingComment),
            },
        };

        let minutes = parse_duration(duration).map_err(|_| LineIssue::InvalidDuration)?;

        Ok(Entry::new(*category, minutes, comment))
    }

    fn push_entry(&mut self, day: DayHeader, entry: Entry) {
        let days = &mut self.output.days;
        let index = *self.day_index.entry(day.clone()).or_insert_with(|| {
            days.push(DayLog {
                header: day,
                entries: Vec::new(),
            });
            days.len() - 1
        });
        days[index].entries.push(entry);
    }

    fn report(&mut self, line_number: usize, line: &str, issue: LineIssue) {
        let diagnostic = Diagnostic {
            line_number,
            line: line.to_string(),
            day: self.current_day.clone(),
            issue,
        };
        tracing::warn!(line = line_number, issue = %issue, "skipping log line");
        self.output.diagnostics.push(diagnostic);
    }
}

pub struct LogParser;

impl LogParser {
    /// Parse a full log into days and entries, collecting diagnostics for
    /// every skipped line.
    pub fn parse(text: &str) -> ParsedLog {
        let mut session = ParseSession::new();
        for (index, line) in text.lines().enumerate() {
            session.process_line(index + 1, line);
        }

        tracing::debug!(
            days = session.output.days.len(),
            entries = session.output.entry_count(),
            skipped = session.output.diagnostics.len(),
            "log parsed"
        );
        session.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn monday() -> DayHeader {
        DayHeader::new(2024, 1, 15, WeekdayLabel::Mon)
    }

    #[test]
    fn test_day_header_regex() {
        assert_eq!(parse_day_header("2024.1.15 Mon."), Some(monday()));
        assert_eq!(
            parse_day_header("2024.01.05 Tues."),
            Some(DayHeader::new(2024, 1, 5, WeekdayLabel::Tue))
        );
        assert_eq!(parse_day_header("2024.1.15 Tue."), None);
        assert_eq!(parse_day_header("2024-1-15 Mon."), None);
        assert_eq!(parse_day_header("2024.1.15  Mon."), None);
        assert_eq!(parse_day_header("2024.1.15 Mon. extra"), None);
        assert_eq!(parse_day_header("24.1.15 Mon."), None);
        assert_eq!(parse_day_header("2024.123.1 Mon."), None);
        assert_eq!(parse_day_header("２０２４.1.15 Mon."), None);
    }

    #[test]
    fn test_inherits_comment_from_same_category() {
        let log = LogParser::parse("2024.1.15 Mon.\n工作 1 # coding\n工作 0.30\n");

        assert!(log.diagnostics.is_empty());
        assert_eq!(
            log.entries_for(&monday()).unwrap(),
            &[Entry::new("工作", 60, "coding"), Entry::new("工作", 30, "coding")]
        );
    }

    #[test]
    fn test_inline_comment_keeps_later_hashes() {
        let log = LogParser::parse("2024.1.15 Mon.\n工作 1 #  issue #42 # review \n");
        assert_eq!(
            log.entries_for(&monday()).unwrap(),
            &[Entry::new("工作", 60, "issue #42 # review")]
        );
    }

    #[test]
    fn test_line_before_any_header() {
        let log = LogParser::parse("工作 1 # coding\n2024.1.15 Mon.\n");

        assert!(log.days.is_empty());
        assert_eq!(log.diagnostics.len(), 1);
        assert_eq!(log.diagnostics[0].issue, LineIssue::NoActiveDay);
        assert_eq!(log.diagnostics[0].line_number, 1);
        assert_eq!(log.diagnostics[0].day, None);
    }

    #[test]
    fn test_wrong_token_count_is_invalid_syntax() {
        let log = LogParser::parse(
            "2024.1.15 Mon.\n工作 1 extra # coding\n工作 # coding\nreading 2 1 3\n",
        );

        assert!(log.days.is_empty());
        let issues: Vec<LineIssue> = log.diagnostics.iter().map(|d| d.issue).collect();
        assert_eq!(
            issues,
            vec![
                LineIssue::InvalidSyntax,
                LineIssue::InvalidSyntax,
                LineIssue::InvalidSyntax
            ]
        );
        assert_eq!(log.diagnostics[0].day, Some(monday()));
    }

    #[test]
    fn test_missing_comment() {
        let log = LogParser::parse("2024.1.15 Mon.\n工作 1\n工作 1 #\n");

        assert!(log.days.is_empty());
        assert_eq!(log.diagnostics.len(), 2);
        assert!(log
            .diagnostics
            .iter()
            .all(|d| d.issue == LineIssue::MissingComment));
    }

    #[test]
    fn test_invalid_duration_does_not_update_memo() {
        let log = LogParser::parse("2024.1.15 Mon.\n运动 x # running\n运动 1\n");

        assert!(log.days.is_empty());
        assert_eq!(log.diagnostics[0].issue, LineIssue::InvalidDuration);
        assert_eq!(log.diagnostics[1].issue, LineIssue::MissingComment);
    }

    #[test]
    fn test_overflowing_duration_is_skipped() {
        let log = LogParser::parse("2024.1.15 Mon.\n工作 999999999999999999 # big\n");

        assert!(log.days.is_empty());
        assert_eq!(log.diagnostics[0].issue, LineIssue::InvalidDuration);
    }

    #[test]
    fn test_memo_holds_only_the_last_entry() {
        let log = LogParser::parse(
            "2024.1.15 Mon.\n工作 1 # coding\n运动 1 # running\n工作 1\n",
        );

        assert_eq!(log.entry_count(), 2);
        assert_eq!(log.diagnostics.len(), 1);
        assert_eq!(log.diagnostics[0].issue, LineIssue::MissingComment);
        assert_eq!(log.diagnostics[0].line_number, 4);
    }

    #[test]
    fn test_new_day_resets_memo() {
        let log = LogParser::parse(
            "2024.1.15 Mon.\n工作 1 # coding\n2024.1.16 Tues.\n工作 1\n",
        );

        assert_eq!(log.entry_count(), 1);
        assert_eq!(log.diagnostics[0].issue, LineIssue::MissingComment);
        assert_eq!(
            log.diagnostics[0].day,
            Some(DayHeader::new(2024, 1, 16, WeekdayLabel::Tue))
        );
    }

    #[test]
    fn test_repeated_header_appends_to_same_day() {
        let log = LogParser::parse(
            "2024.1.15 Mon.\n工作 1 # a\n2024.1.16 Tues.\n工作 1 # b\n2024.1.15 Mon.\n工作 2 # c\n",
        );

        assert_eq!(log.days.len(), 2);
        assert_eq!(log.days[0].header, monday());
        assert_eq!(
            log.days[0].entries,
            vec![Entry::new("工作", 60, "a"), Entry::new("工作", 120, "c")]
        );
    }

    #[test]
    fn test_blank_and_indented_lines() {
        let log = LogParser::parse("\n  2024.1.15 Mon.  \n\n\t工作 90min # coding\t\n   \n");

        assert!(log.diagnostics.is_empty());
        assert_eq!(
            log.entries_for(&monday()).unwrap(),
            &[Entry::new("工作", 90, "coding")]
        );
    }

    #[test]
    fn test_fullwidth_digits_are_not_a_header() {
        let log = LogParser::parse("２０２４.1.15 Mon.\n工作 1 # a\n");

        assert!(log.days.is_empty());
        assert_eq!(log.diagnostics.len(), 2);
        assert!(log
            .diagnostics
            .iter()
            .all(|d| d.issue == LineIssue::NoActiveDay));
    }

    #[test]
    fn test_header_without_entries_is_not_a_day() {
        let log = LogParser::parse("2024.1.15 Mon.\n2024.1.16 Tues.\n工作 1 # a\n");
        assert_eq!(log.days.len(), 1);
        assert_eq!(log.entries_for(&monday()), None);
    }
}
