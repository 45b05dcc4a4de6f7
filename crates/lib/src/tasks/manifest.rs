//! Task manifests: a JSON array of task descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::TaskDescriptor;

#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read task manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse task manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },
}

/// Load the task descriptors listed in the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<TaskDescriptor>, ManifestError> {
  let content = fs::read_to_string(path).map_err(|e| ManifestError::Read {
    path: path.to_path_buf(),
    source: e,
  })?;

  let tasks: Vec<TaskDescriptor> = serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
    path: path.to_path_buf(),
    source: e,
  })?;

  debug!(path = %path.display(), count = tasks.len(), "loaded task manifest");
  Ok(tasks)
}
