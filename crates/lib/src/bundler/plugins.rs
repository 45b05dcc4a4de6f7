//! Build-time plugin list.
//!
//! Clean and markup generation always come first; the remaining plugins are
//! each enabled by one environment flag and contribute at most one entry.

use std::path::Path;

use crate::consts::{TEMPLATE_CANDIDATE, TEMPLATE_FALLBACK};
use crate::environment::Environment;
use crate::probe::{FileProbe, first_existing};
use crate::settings::BuildSettings;

use super::types::{CompressionOptions, ExtractStylesOptions, HtmlMeta, HtmlOptions, Minify, Pattern, Plugin};

const COMPRESSED_ASSETS: &str = r"\.(ts|js|css|html|svg)$";
const COMPRESSION_THRESHOLD: u64 = 10240;
const COMPRESSION_MIN_RATIO: f64 = 0.8;

pub fn plugins(root: &Path, env: &Environment, settings: &BuildSettings, probe: &dyn FileProbe) -> Vec<Plugin> {
  let mut plugins = vec![Plugin::Clean, Plugin::Html(html_options(root, env, settings, probe))];

  plugins.extend(env.production.then_some(Plugin::HotModuleReplacement));
  plugins.extend(env.extract_styles.then(|| Plugin::ExtractStyles(extract_styles_options(env))));
  plugins.extend(env.analyze.then_some(Plugin::BundleAnalyzer));
  plugins.extend(env.production.then(|| Plugin::Compression(compression_options())));

  plugins
}

fn html_options(root: &Path, env: &Environment, settings: &BuildSettings, probe: &dyn FileProbe) -> HtmlOptions {
  HtmlOptions {
    minify: env.production.then_some(Minify {
      remove_comments: true,
      collapse_whitespace: true,
    }),
    template: first_existing(probe, root.join(TEMPLATE_CANDIDATE), root.join(TEMPLATE_FALLBACK)),
    meta: HtmlMeta {
      title: settings.title.clone(),
      server: env.server.clone(),
      base_url: settings.base_url.clone(),
    },
  }
}

fn extract_styles_options(env: &Environment) -> ExtractStylesOptions {
  let filename = if env.mode().is_production() {
    "[contenthash].css"
  } else {
    "[id].css"
  };
  ExtractStylesOptions {
    filename: filename.to_string(),
    all_chunks: true,
  }
}

fn compression_options() -> CompressionOptions {
  CompressionOptions {
    asset: "[path].br[query]".to_string(),
    test: Pattern::new(COMPRESSED_ASSETS),
    threshold: COMPRESSION_THRESHOLD,
    min_ratio: COMPRESSION_MIN_RATIO,
  }
}
