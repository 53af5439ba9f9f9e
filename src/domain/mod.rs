//! Domain layer - Log parsing and record normalization

pub mod day;
pub mod duration;
pub mod parser;
pub mod record;
pub mod synonyms;

pub use day::{DayHeader, Entry, WeekdayLabel};
pub use duration::parse_duration;
pub use parser::{DayLog, Diagnostic, LineIssue, LogParser, ParsedLog};
pub use record::{truncated_hours, week_of_year, NormalizedRecord};
pub use synonyms::SynonymTable;
