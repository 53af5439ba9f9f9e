//! Infrastructure layer - File access, configuration and the record store

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, LogRepository};
pub use store::{DayCategoryTotal, DayCommentHours, RecordStore, WeekCategoryTotal, WORK_CATEGORY};
