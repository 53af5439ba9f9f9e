//! Output formatting utilities

use crate::application::ReportRows;
use crate::domain::{Diagnostic, NormalizedRecord};
use crate::infrastructure::{DayCategoryTotal, DayCommentHours, WeekCategoryTotal};
use chrono::NaiveDate;

fn date_field(date: NaiveDate) -> String {
    format!("'{}'", date.format("%Y-%m-%d"))
}

/// Format every row of a report, one tuple per line
pub fn format_rows(rows: &ReportRows) -> String {
    match rows {
        ReportRows::All(records) => format_records(records),
        ReportRows::Day(totals) => format_day_totals(totals),
        ReportRows::Week(totals) => format_week_totals(totals),
        ReportRows::Work(hours) => format_comment_hours(hours),
    }
}

pub fn format_records(records: &[NormalizedRecord]) -> String {
    let mut output = String::new();
    for r in records {
        output.push_str(&format!(
            "({}, '{}', {}, '{}')\n",
            date_field(r.date),
            r.category,
            r.minutes,
            r.comment
        ));
    }
    output
}

pub fn format_day_totals(totals: &[DayCategoryTotal]) -> String {
    let mut output = String::new();
    for t in totals {
        output.push_str(&format!(
            "({}, '{}', {})\n",
            date_field(t.date),
            t.category,
            t.minutes
        ));
    }
    output
}

pub fn format_week_totals(totals: &[WeekCategoryTotal]) -> String {
    let mut output = String::new();
    for t in totals {
        output.push_str(&format!("('{:02}', '{}', {})\n", t.week, t.category, t.minutes));
    }
    output
}

pub fn format_comment_hours(hours: &[DayCommentHours]) -> String {
    let mut output = String::new();
    for h in hours {
        // Debug keeps the trailing ".0" on whole hours
        output.push_str(&format!(
            "({}, '{}', {:?})\n",
            date_field(h.date),
            h.comment,
            h.hours
        ));
    }
    output
}

/// Format a skipped line the way it is shown on stderr
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    match &diagnostic.day {
        Some(day) => format!(
            "Error: {} (line {}): {} {}",
            diagnostic.issue, diagnostic.line_number, day, diagnostic.line
        ),
        None => format!(
            "Error: {} (line {}): {}",
            diagnostic.issue, diagnostic.line_number, diagnostic.line
        ),
    }
}
