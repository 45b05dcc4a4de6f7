//! Explicit overrides for the generated bundler configuration.
//!
//! Each field has a literal default and may be overridden by a prefixed
//! environment variable. The process environment is only read by
//! [`BuildSettings::from_env`]; everything else takes the settings as a value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
  BASE_URL_VAR, COMPONENT_DIR_VAR, DEFAULT_BASE_URL, DEFAULT_COMPONENT_DIR, DEFAULT_FEATURES_DIR,
  DEFAULT_OUT_DIR_NAME, FEATURES_DIR_VAR, OUT_DIR_VAR, WEB_TITLE_VAR,
};
use crate::util::path::resolve;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
  /// Feature module search directory, relative to the root unless absolute.
  pub features_dir: String,
  /// Component module search directory, relative to the root unless absolute.
  pub component_dir: String,
  /// Output directory. `None` means `<root>/wwwroot`.
  pub out_dir: Option<PathBuf>,
  /// Page title passed to the markup template.
  pub title: String,
  /// Public base path for emitted assets.
  pub base_url: String,
}

impl Default for BuildSettings {
  fn default() -> Self {
    Self {
      features_dir: DEFAULT_FEATURES_DIR.to_string(),
      component_dir: DEFAULT_COMPONENT_DIR.to_string(),
      out_dir: None,
      title: String::new(),
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

impl BuildSettings {
  /// Read overrides from the process environment.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Read overrides through `lookup`.
  ///
  /// An empty value counts as unset, so there is no way to override a field
  /// with the empty string.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |key: &str| {
      let value = lookup(key).filter(|v| !v.is_empty());
      if let Some(ref v) = value {
        debug!(var = key, value = %v, "using environment override");
      }
      value
    };

    let defaults = Self::default();
    Self {
      features_dir: read(FEATURES_DIR_VAR).unwrap_or(defaults.features_dir),
      component_dir: read(COMPONENT_DIR_VAR).unwrap_or(defaults.component_dir),
      out_dir: read(OUT_DIR_VAR).map(PathBuf::from),
      title: read(WEB_TITLE_VAR).unwrap_or(defaults.title),
      base_url: read(BASE_URL_VAR).unwrap_or(defaults.base_url),
    }
  }

  /// Output directory for `root`: the override if set, else `<root>/wwwroot`.
  pub fn out_dir(&self, root: &Path) -> PathBuf {
    match &self.out_dir {
      Some(dir) => resolve(root, dir),
      None => root.join(DEFAULT_OUT_DIR_NAME),
    }
  }

  pub fn features_dir(&self, root: &Path) -> PathBuf {
    resolve(root, &self.features_dir)
  }

  pub fn component_dir(&self, root: &Path) -> PathBuf {
    resolve(root, &self.component_dir)
  }
}
