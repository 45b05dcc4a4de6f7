use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::environment::Mode;
use crate::util::hash::Hashable;

/// Configuration handed to the bundler.
///
/// Field names follow the bundler's configuration contract so the serialized
/// value can be loaded by the host script as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
  pub mode: Mode,
  /// Absolute project root.
  pub context: PathBuf,
  pub target: String,
  pub dev_server: DevServer,
  pub watch_options: WatchOptions,
  pub resolve: Resolve,
  pub entry: PathBuf,
  pub output: Output,
  pub performance: Performance,
  /// Source map mode. Only set in development.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub devtool: Option<SourceMap>,
  pub module: ModuleRules,
  pub plugins: Vec<Plugin>,
  /// Chunk splitting. Only set in production.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub optimization: Option<Optimization>,
}

impl Hashable for BuildConfiguration {}

impl BuildConfiguration {
  /// Names of the enabled plugins, in order.
  pub fn plugin_names(&self) -> Vec<&'static str> {
    self.plugins.iter().map(Plugin::name).collect()
  }

  pub fn has_plugin(&self, name: &str) -> bool {
    self.plugins.iter().any(|p| p.name() == name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
  pub history_api_fallback: bool,
  /// Path prefix to upstream URL.
  pub proxy: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchOptions {
  pub ignored: Vec<String>,
}

/// Module resolution rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolve {
  pub symlinks: bool,
  pub extensions: Vec<String>,
  /// Search path, in lookup order.
  pub modules: Vec<PathBuf>,
  pub alias: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
  pub filename: String,
  pub source_map_filename: String,
  pub chunk_filename: String,
  pub path: PathBuf,
  pub public_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
  pub hints: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMap {
  InlineSourceMap,
}

/// A regular expression in source form, e.g. `\.scss$` with flags `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
  pub source: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub flags: String,
}

impl Pattern {
  pub fn new(source: &str) -> Self {
    Self {
      source: source.to_string(),
      flags: String::new(),
    }
  }

  pub fn case_insensitive(mut self) -> Self {
    self.flags.push('i');
    self
  }
}

impl fmt::Display for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}/{}", self.source, self.flags)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRules {
  pub rules: Vec<Rule>,
}

/// One file transformation rule.
///
/// A rule carries either a single `loader` or a `use` chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
  pub test: Pattern,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issuer: Option<Pattern>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<Pattern>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub loader: Option<String>,
  #[serde(rename = "use", default, skip_serializing_if = "Vec::is_empty")]
  pub chain: Vec<LoaderUse>,
}

impl Rule {
  /// Loader names applied by this rule, in order.
  pub fn loaders(&self) -> Vec<&str> {
    match &self.loader {
      Some(loader) => vec![loader.as_str()],
      None => self.chain.iter().map(LoaderUse::loader).collect(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderUse {
  Name(String),
  Configured {
    loader: String,
    options: serde_json::Value,
  },
}

impl LoaderUse {
  pub fn loader(&self) -> &str {
    match self {
      Self::Name(name) => name,
      Self::Configured { loader, .. } => loader,
    }
  }
}

/// An enabled build-time plugin and its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options")]
pub enum Plugin {
  #[serde(rename = "clean-webpack-plugin")]
  Clean,
  #[serde(rename = "html-webpack-plugin")]
  Html(HtmlOptions),
  #[serde(rename = "HotModuleReplacementPlugin")]
  HotModuleReplacement,
  #[serde(rename = "extract-text-webpack-plugin")]
  ExtractStyles(ExtractStylesOptions),
  #[serde(rename = "webpack-bundle-analyzer")]
  BundleAnalyzer,
  #[serde(rename = "brotli-webpack-plugin")]
  Compression(CompressionOptions),
}

impl Plugin {
  pub const CLEAN: &'static str = "clean-webpack-plugin";
  pub const HTML: &'static str = "html-webpack-plugin";
  pub const HOT_MODULE_REPLACEMENT: &'static str = "HotModuleReplacementPlugin";
  pub const EXTRACT_STYLES: &'static str = "extract-text-webpack-plugin";
  pub const BUNDLE_ANALYZER: &'static str = "webpack-bundle-analyzer";
  pub const COMPRESSION: &'static str = "brotli-webpack-plugin";

  pub fn name(&self) -> &'static str {
    match self {
      Self::Clean => Self::CLEAN,
      Self::Html(_) => Self::HTML,
      Self::HotModuleReplacement => Self::HOT_MODULE_REPLACEMENT,
      Self::ExtractStyles(_) => Self::EXTRACT_STYLES,
      Self::BundleAnalyzer => Self::BUNDLE_ANALYZER,
      Self::Compression(_) => Self::COMPRESSION,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minify: Option<Minify>,
  pub template: PathBuf,
  pub meta: HtmlMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minify {
  pub remove_comments: bool,
  pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMeta {
  pub title: String,
  pub server: Option<String>,
  pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStylesOptions {
  pub filename: String,
  pub all_chunks: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionOptions {
  pub asset: String,
  pub test: Pattern,
  /// Minimum asset size in bytes.
  pub threshold: u64,
  pub min_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
  pub split_chunks: SplitChunks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
  pub cache_groups: BTreeMap<String, CacheGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheGroup {
  pub test: Pattern,
  pub name: String,
  pub chunks: String,
}
