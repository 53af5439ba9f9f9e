//! Initialize config use case

use crate::error::{Result, TimelogError};
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::fs;
use std::path::Path;

/// Write a default timelog.toml into `path`.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    if repo.has_config() {
        return Err(TimelogError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    repo.save_config(&Config::default())?;

    println!("Initialized timelog at {}", path.display());

    Ok(())
}
