//! Filesystem SQL sink
//!
//! Writes rendered SQL files under a default output directory, creating
//! missing directories and overwriting existing files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::SqlFileRepository;
use crate::error::ShipctlResult;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "sql-output-store-management";

/// SQL sink backed by the local filesystem.
pub struct FileSystemSqlRepository {
    default_dir: PathBuf,
}

impl FileSystemSqlRepository {
    pub fn new() -> Self {
        Self {
            default_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_default_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            default_dir: dir.into(),
        }
    }
}

impl Default for FileSystemSqlRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlFileRepository for FileSystemSqlRepository {
    fn save(&self, sql: &str, filename: &str, output_dir: Option<&Path>) -> ShipctlResult<PathBuf> {
        let dir = output_dir.unwrap_or(&self.default_dir);
        fs::create_dir_all(dir)?;

        let filepath = dir.join(filename);
        fs::write(&filepath, sql)?;

        Ok(filepath)
    }
}
