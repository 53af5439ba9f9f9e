//! Day headers and the entries logged under them

use crate::error::{Result, TimelogError};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Weekday label written after the date of a day header.
///
/// The label is kept as written; it is never checked against the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeekdayLabel {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekdayLabel {
    /// The spelling used in log files, including the trailing dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayLabel::Mon => "Mon.",
            WeekdayLabel::Tue => "Tues.",
            WeekdayLabel::Wed => "Weds.",
            WeekdayLabel::Thu => "Thur.",
            WeekdayLabel::Fri => "Fri.",
            WeekdayLabel::Sat => "Sat.",
            WeekdayLabel::Sun => "Sun.",
        }
    }
}

impl FromStr for WeekdayLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Mon." => Ok(WeekdayLabel::Mon),
            "Tues." => Ok(WeekdayLabel::Tue),
            "Weds." => Ok(WeekdayLabel::Wed),
            "Thur." => Ok(WeekdayLabel::Thu),
            "Fri." => Ok(WeekdayLabel::Fri),
            "Sat." => Ok(WeekdayLabel::Sat),
            "Sun." => Ok(WeekdayLabel::Sun),
            _ => Err(format!("Unknown weekday label: {}", s)),
        }
    }
}

impl fmt::Display for WeekdayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `YYYY.M.D Weekday.` line opening a block of entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayHeader {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: WeekdayLabel,
}

impl DayHeader {
    pub fn new(year: i32, month: u32, day: u32, weekday: WeekdayLabel) -> Self {
        DayHeader {
            year,
            month,
            day,
            weekday,
        }
    }

    /// Calendar date of this header, dropping the weekday label.
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| TimelogError::InvalidDate(self.to_string()))
    }
}

impl fmt::Display for DayHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} {}",
            self.year, self.month, self.day, self.weekday
        )
    }
}

/// One logged activity: a category, its duration and what it was about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub category: String,
    pub minutes: i64,
    pub comment: String,
}

impl Entry {
    pub fn new(category: impl Into<String>, minutes: i64, comment: impl Into<String>) -> Self {
        Entry {
            category: category.into(),
            minutes,
            comment: comment.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_label_round_trip_spelling() {
        for label in ["Mon.", "Tues.", "Weds.", "Thur.", "Fri.", "Sat.", "Sun."] {
            assert_eq!(WeekdayLabel::from_str(label).unwrap().as_str(), label);
        }
        assert!(WeekdayLabel::from_str("Tue.").is_err());
        assert!(WeekdayLabel::from_str("Monday").is_err());
    }

    #[test]
    fn test_header_date() {
        let header = DayHeader::new(2024, 1, 5, WeekdayLabel::Fri);
        assert_eq!(
            header.date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_weekday_not_checked_against_date() {
        // 2024-01-05 is a Friday
        let header = DayHeader::new(2024, 1, 5, WeekdayLabel::Mon);
        assert!(header.date().is_ok());
        assert_eq!(header.to_string(), "2024.1.5 Mon.");
    }

    #[test]
    fn test_impossible_date() {
        let header = DayHeader::new(2024, 2, 30, WeekdayLabel::Fri);
        assert!(matches!(
            header.date(),
            Err(TimelogError::InvalidDate(h)) if h == "2024.2.30 Fri."
        ));
    }
}
