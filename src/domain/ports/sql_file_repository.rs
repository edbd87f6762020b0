//! SQL file persistence port

use std::path::{Path, PathBuf};

use crate::error::ShipctlResult;

/// Sink for rendered SQL text.
///
/// Creates missing directories, overwrites existing files, writes UTF-8
/// verbatim.
pub trait SqlFileRepository: Send + Sync {
    /// Write `sql` as `filename` under `output_dir` (or the sink's default
    /// directory) and return the written path.
    fn save(&self, sql: &str, filename: &str, output_dir: Option<&Path>) -> ShipctlResult<PathBuf>;
}
