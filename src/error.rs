//! Error types for timelog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for timelog
#[derive(Debug, Error)]
pub enum TimelogError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TimelogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TimelogError::DataFileNotFound(_) => 2,
            TimelogError::InvalidDate(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TimelogError::DataFileNotFound(path) => {
                format!(
                    "Data file not found: {}\n\n\
                    Suggestions:\n\
                    • Run timelog from the directory holding data.txt\n\
                    • Pass the log explicitly: timelog --data path/to/log.txt\n\
                    • Set data_file in timelog.toml",
                    path.display()
                )
            }
            TimelogError::InvalidDate(header) => {
                format!(
                    "Invalid date in day header: '{}'\n\n\
                    Day headers look like:\n\
                    2024.1.15 Mon.\n\
                    2024.11.2 Sat.\n\n\
                    The date must exist in the calendar.",
                    header
                )
            }
            TimelogError::Config(msg) => {
                if msg.contains("timelog.toml") {
                    format!(
                        "{}\n\n\
                        Valid keys: data_file, synonyms_file, work_category\n\
                        Example: data_file = \"data.txt\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TimelogError
pub type Result<T> = std::result::Result<T, TimelogError>;
