//! File system access to the log, synonym and config files

use crate::error::{Result, TimelogError};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract source of the files a report run reads
pub trait LogRepository {
    /// Load configuration from timelog.toml (defaults if absent)
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to timelog.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Read the time-tracking log. A missing log is an error.
    fn read_log(&self, path: &Path) -> Result<String>;

    /// Read the synonym file, or `None` if it does not exist
    fn read_synonyms(&self, path: &Path) -> Result<Option<String>>;
}

/// File system implementation of LogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Use TIMELOG_ROOT if set, otherwise the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TIMELOG_ROOT") {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TimelogError::Config(format!(
                    "TIMELOG_ROOT is set to '{}' but it is not a directory",
                    path.display()
                )));
            }
        }

        Ok(FileSystemRepository::new(std::env::current_dir()?))
    }

    /// Resolve a configured path against the root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Check if a config file exists in the root
    pub fn has_config(&self) -> bool {
        self.root.join(CONFIG_FILE).is_file()
    }
}

impl LogRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn read_log(&self, path: &Path) -> Result<String> {
        let path = self.resolve(path);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TimelogError::DataFileNotFound(path.clone())
            } else {
                TimelogError::Io(e)
            }
        })
    }

    fn read_synonyms(&self, path: &Path) -> Result<Option<String>> {
        let path = self.resolve(path);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no synonym file");
                Ok(None)
            }
            Err(e) => Err(TimelogError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_log() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data.txt"), "2024.1.1 Mon.\n").unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(
            repo.read_log(Path::new("data.txt")).unwrap(),
            "2024.1.1 Mon.\n"
        );
    }

    #[test]
    fn test_missing_log_is_error() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        match repo.read_log(Path::new("data.txt")).unwrap_err() {
            TimelogError::DataFileNotFound(path) => {
                assert_eq!(path, temp.path().join("data.txt"))
            }
            other => panic!("Expected DataFileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_synonyms_is_none() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.read_synonyms(Path::new("syn.txt")).unwrap(), None);
    }

    #[test]
    fn test_absolute_path_not_joined() {
        let temp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let syn = other.path().join("syn.txt");
        fs::write(&syn, "a b\n").unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.resolve(&syn), syn);
        assert_eq!(repo.read_synonyms(&syn).unwrap().as_deref(), Some("a b\n"));
    }

    #[test]
    fn test_config_round_trip_through_repository() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(!repo.has_config());

        repo.save_config(&Config::default()).unwrap();

        assert!(repo.has_config());
        assert_eq!(repo.load_config().unwrap(), Config::default());
    }
}
