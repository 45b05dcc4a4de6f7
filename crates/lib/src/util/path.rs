//! Lexical path helpers.
//!
//! Paths in the generated configuration are resolved against the project root
//! without touching the filesystem. A relative root is first anchored at the
//! current working directory.

use std::path::{Component, Path, PathBuf};

/// Resolve `segment` against `base`, the way a bundler resolves relative paths.
///
/// An absolute `segment` replaces `base`. `.` components are dropped and `..`
/// pops the previous component, or is kept when a relative path has nothing
/// left to pop.
pub fn resolve(base: &Path, segment: impl AsRef<Path>) -> PathBuf {
  let segment = segment.as_ref();
  let joined = if segment.is_absolute() {
    segment.to_path_buf()
  } else {
    base.join(segment)
  };
  normalize(&joined)
}

/// Make `path` absolute against the current directory, then normalize it.
///
/// Falls back to a lexical normalization if the current directory cannot be
/// read.
pub fn absolute(path: &Path) -> PathBuf {
  match std::path::absolute(path) {
    Ok(abs) => normalize(&abs),
    Err(_) => normalize(path),
  }
}

/// Normalize a path lexically (resolve `.` and `..`).
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::ParentDir => match normalized.components().next_back() {
        Some(Component::Normal(_)) => {
          normalized.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => normalized.push(Component::ParentDir),
      },
      Component::CurDir => {}
      _ => normalized.push(component),
    }
  }
  normalized
}
