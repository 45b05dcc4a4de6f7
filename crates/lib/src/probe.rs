//! File-existence checks used to pick between candidate files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Answers whether a path exists.
pub trait FileProbe {
  fn exists(&self, path: &Path) -> bool;
}

/// Probes the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }
}

/// Reports only a fixed set of paths as existing.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
  paths: HashSet<PathBuf>,
}

impl StaticProbe {
  pub fn new<I, P>(paths: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    Self {
      paths: paths.into_iter().map(Into::into).collect(),
    }
  }
}

impl FileProbe for StaticProbe {
  fn exists(&self, path: &Path) -> bool {
    self.paths.contains(path)
  }
}

/// Returns `candidate` if it exists, otherwise `fallback`.
///
/// The fallback is returned without checking it, so the result may name a
/// file that does not exist.
pub fn first_existing(probe: &dyn FileProbe, candidate: PathBuf, fallback: PathBuf) -> PathBuf {
  if probe.exists(&candidate) {
    trace!(path = %candidate.display(), "candidate exists");
    candidate
  } else {
    trace!(path = %fallback.display(), "falling back");
    fallback
  }
}
