//! Configuration management

use crate::error::{Result, TimelogError};
use crate::infrastructure::store::WORK_CATEGORY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file in the working root.
pub const CONFIG_FILE: &str = "timelog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Time-tracking log, relative to the root unless absolute
    pub data_file: PathBuf,
    /// Synonym groups; a missing file means no normalization
    pub synonyms_file: PathBuf,
    /// Category summarized by the per-comment hours report
    pub work_category: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("data.txt"),
            synonyms_file: PathBuf::from("syn.txt"),
            work_category: WORK_CATEGORY.to_string(),
        }
    }
}

impl Config {
    /// Load config from timelog.toml in the given directory, falling back to
    /// defaults when the file does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(TimelogError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TimelogError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config to timelog.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }
}
