//! File transformation rules.
//!
//! Style sheets are matched per issuer: a sheet imported from code is injected
//! at runtime through `style-loader`, a sheet referenced from markup is only
//! resolved by `css-loader`.

use serde_json::json;

use super::types::{LoaderUse, Pattern, Rule};

const CSS: &str = r"\.css$";
const SCSS: &str = r"\.scss$";
const HTML: &str = r"\.html$";
const SCRIPT: &str = r"\.[tj]s$";
const MARKUP_ISSUER: &str = r"\.html?$";
const DEPENDENCY_DIRS: &str = r"(node_modules|bower_components)";

/// Where a referenced style sheet was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issuer {
  Code,
  Markup,
}

impl Issuer {
  fn pattern(self) -> Pattern {
    match self {
      Self::Code => Pattern::new(SCRIPT).case_insensitive(),
      Self::Markup => Pattern::new(MARKUP_ISSUER).case_insensitive(),
    }
  }
}

/// The ordered rule table.
pub fn transform_rules() -> Vec<Rule> {
  vec![
    css_rule(Issuer::Code),
    css_rule(Issuer::Markup),
    scss_rule(Issuer::Code),
    scss_rule(Issuer::Markup),
    single(Pattern::new(HTML).case_insensitive(), "html-loader"),
    Rule {
      exclude: Some(Pattern::new(DEPENDENCY_DIRS)),
      ..single(Pattern::new(SCRIPT).case_insensitive(), "ts-loader")
    },
  ]
}

fn css_rule(issuer: Issuer) -> Rule {
  let mut chain = Vec::new();
  if issuer == Issuer::Code {
    chain.push(named("style-loader"));
  }
  chain.push(named("css-loader"));
  chained(Pattern::new(CSS), issuer, chain)
}

fn scss_rule(issuer: Issuer) -> Rule {
  let mut chain = Vec::new();
  if issuer == Issuer::Code {
    chain.push(named("style-loader"));
  }
  chain.push(named("css-loader"));
  chain.push(LoaderUse::Configured {
    loader: "postcss-loader".to_string(),
    options: json!({ "postcssOptions": { "plugins": ["autoprefixer"] } }),
  });
  chain.push(named("sass-loader"));
  chained(Pattern::new(SCSS), issuer, chain)
}

fn named(loader: &str) -> LoaderUse {
  LoaderUse::Name(loader.to_string())
}

fn chained(test: Pattern, issuer: Issuer, chain: Vec<LoaderUse>) -> Rule {
  Rule {
    test,
    issuer: Some(issuer.pattern()),
    exclude: None,
    loader: None,
    chain,
  }
}

fn single(test: Pattern, loader: &str) -> Rule {
  Rule {
    test,
    issuer: None,
    exclude: None,
    loader: Some(loader.to_string()),
    chain: Vec::new(),
  }
}
