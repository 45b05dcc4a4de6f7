//! Bundler environment flags.
//!
//! The bundler forwards `--env` entries to the configuration; these select the
//! build mode and the optional plugins.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Build mode of the generated configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  #[default]
  Development,
  Production,
}

impl Mode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Development => "development",
      Self::Production => "production",
    }
  }

  pub fn is_production(&self) -> bool {
    matches!(self, Self::Production)
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Flags passed to the configuration by the bundler. All default to off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Environment {
  pub production: bool,
  /// Emit style sheets as separate files instead of injecting them.
  #[serde(alias = "extractCss")]
  pub extract_styles: bool,
  /// Run the bundle analyzer.
  pub analyze: bool,
  /// Free-form server label forwarded to the markup template.
  pub server: Option<String>,
}

impl Environment {
  /// Parse `--env` entries such as `production`, `analyze=true` or `server=staging`.
  ///
  /// Unrecognised entries and unparseable booleans are skipped.
  pub fn from_args<I, S>(args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut env = Self::default();
    for arg in args {
      let arg = arg.as_ref().trim();
      let arg = arg.strip_prefix("--env.").unwrap_or(arg);
      let (key, value) = match arg.split_once('=') {
        Some((k, v)) => (k, Some(v)),
        None => (arg, None),
      };

      let flag = match key {
        "production" => &mut env.production,
        "extractStyles" | "extractCss" => &mut env.extract_styles,
        "analyze" => &mut env.analyze,
        "server" => {
          env.server = value.filter(|v| !v.is_empty()).map(str::to_string);
          continue;
        }
        _ => {
          debug!(entry = arg, "ignoring unrecognised environment entry");
          continue;
        }
      };

      match value.map(parse_bool) {
        None => *flag = true,
        Some(Some(v)) => *flag = v,
        Some(None) => debug!(entry = arg, "ignoring non-boolean value"),
      }
    }
    env
  }

  pub fn mode(&self) -> Mode {
    if self.production {
      Mode::Production
    } else {
      Mode::Development
    }
  }
}

fn parse_bool(value: &str) -> Option<bool> {
  match value {
    "true" | "1" | "" => Some(true),
    "false" | "0" => Some(false),
    _ => None,
  }
}
