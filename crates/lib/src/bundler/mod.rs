//! Bundler configuration generation.
//!
//! [`ConfigurationBuilder`] maps a project root, the bundler environment flags
//! and the explicit [`BuildSettings`] to a [`BuildConfiguration`]. The only
//! disk access is through the [`FileProbe`], which picks the entry point and
//! the markup template.
//!
//! # Example
//! ```
//! use std::path::Path;
//! use webcfg_lib::bundler::ConfigurationBuilder;
//! use webcfg_lib::environment::{Environment, Mode};
//! use webcfg_lib::probe::StaticProbe;
//!
//! let config = ConfigurationBuilder::new(Path::new("/app"))
//!   .environment(Environment::from_args(["production"]))
//!   .probe(StaticProbe::new(["/app/main.ts"]))
//!   .build();
//!
//! assert_eq!(config.mode, Mode::Production);
//! assert_eq!(config.entry, Path::new("/app/main.ts"));
//! ```

mod plugins;
mod rules;
mod types;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use rules::Issuer;
pub use types::*;

use crate::consts::{ENTRY_CANDIDATE, ENTRY_FALLBACK, MODULES_DIR, STYLES_ALIAS, STYLES_DIR};
use crate::environment::{Environment, Mode};
use crate::probe::{FileProbe, FsProbe, first_existing};
use crate::settings::BuildSettings;
use crate::util::path::{absolute, resolve};

/// Files excluded from watching (`for_*` test fixtures kept next to the code).
const WATCH_IGNORED: &str = "**/for_*";
const API_PROXY_PREFIX: &str = "/api";
const API_PROXY_TARGET: &str = "http://localhost:5000";
const VENDOR_CHUNK_TEST: &str = r"[\\/]node_modules[\\/]";

/// Assembles a [`BuildConfiguration`].
///
/// Defaults to an empty environment, [`BuildSettings::default`] and the real
/// filesystem.
pub struct ConfigurationBuilder {
  root: PathBuf,
  env: Environment,
  settings: BuildSettings,
  probe: Box<dyn FileProbe>,
}

impl ConfigurationBuilder {
  pub fn new(root: &Path) -> Self {
    Self {
      root: absolute(root),
      env: Environment::default(),
      settings: BuildSettings::default(),
      probe: Box::new(FsProbe),
    }
  }

  pub fn environment(mut self, env: Environment) -> Self {
    self.env = env;
    self
  }

  pub fn settings(mut self, settings: BuildSettings) -> Self {
    self.settings = settings;
    self
  }

  pub fn probe(mut self, probe: impl FileProbe + 'static) -> Self {
    self.probe = Box::new(probe);
    self
  }

  pub fn build(&self) -> BuildConfiguration {
    build(&self.root, &self.env, &self.settings, self.probe.as_ref())
  }

  /// Build, then let `customize` adjust the result before it is returned.
  pub fn build_with<F>(&self, customize: F) -> BuildConfiguration
  where
    F: FnOnce(&mut BuildConfiguration),
  {
    let mut config = self.build();
    customize(&mut config);
    config
  }
}

/// Generate the bundler configuration for the project at `root`.
///
/// A relative `root` is taken from the current directory. Never fails: unset
/// inputs fall back to their defaults, and a missing fallback file is left for
/// the bundler to report.
pub fn build(root: &Path, env: &Environment, settings: &BuildSettings, probe: &dyn FileProbe) -> BuildConfiguration {
  let root = absolute(root);
  let root = root.as_path();
  let mode = env.mode();

  let config = BuildConfiguration {
    mode,
    context: root.to_path_buf(),
    target: "web".to_string(),
    dev_server: dev_server(),
    watch_options: WatchOptions {
      ignored: vec![WATCH_IGNORED.to_string()],
    },
    resolve: resolve_rules(root, settings),
    entry: first_existing(probe, root.join(ENTRY_CANDIDATE), root.join(ENTRY_FALLBACK)),
    output: output(root, mode, settings),
    performance: Performance { hints: false },
    devtool: (!mode.is_production()).then_some(SourceMap::InlineSourceMap),
    module: ModuleRules {
      rules: rules::transform_rules(),
    },
    plugins: plugins::plugins(root, env, settings, probe),
    optimization: mode.is_production().then(vendor_split),
  };

  debug!(plugins = ?config.plugin_names(), entry = %config.entry.display(), "assembled configuration");
  info!(mode = %mode, root = %root.display(), "generated bundler configuration");

  config
}

fn dev_server() -> DevServer {
  DevServer {
    history_api_fallback: true,
    proxy: BTreeMap::from([(API_PROXY_PREFIX.to_string(), API_PROXY_TARGET.to_string())]),
  }
}

fn resolve_rules(root: &Path, settings: &BuildSettings) -> Resolve {
  Resolve {
    symlinks: false,
    extensions: vec![".ts".to_string(), ".js".to_string()],
    modules: vec![
      settings.features_dir(root),
      settings.component_dir(root),
      PathBuf::from(MODULES_DIR),
    ],
    alias: BTreeMap::from([(STYLES_ALIAS.to_string(), resolve(root, STYLES_DIR))]),
  }
}

fn output(root: &Path, mode: Mode, settings: &BuildSettings) -> Output {
  let hash = match mode {
    Mode::Production => "[chunkhash]",
    Mode::Development => "[hash]",
  };
  Output {
    filename: format!("[name].{hash}.bundle.js"),
    source_map_filename: format!("[name].{hash}.bundle.map"),
    chunk_filename: format!("[name].{hash}.chunk.js"),
    path: settings.out_dir(root),
    public_path: settings.base_url.clone(),
  }
}

fn vendor_split() -> Optimization {
  Optimization {
    split_chunks: SplitChunks {
      cache_groups: BTreeMap::from([(
        "commons".to_string(),
        CacheGroup {
          test: Pattern::new(VENDOR_CHUNK_TEST),
          name: "vendors".to_string(),
          chunks: "all".to_string(),
        },
      )]),
    },
  }
}
