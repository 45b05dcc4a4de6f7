//! Implementation of the `webcfg config` command.
//!
//! Generates the bundler configuration for a project root, reading overrides
//! from the process environment.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use webcfg_lib::bundler::ConfigurationBuilder;
use webcfg_lib::environment::Environment;
use webcfg_lib::settings::BuildSettings;
use webcfg_lib::util::hash::Hashable;

use crate::output::{OutputFormat, print_item, print_json, print_stat, print_success};

pub fn cmd_config(root: &str, env_args: &[String], format: OutputFormat) -> Result<()> {
  let root = dunce::canonicalize(Path::new(root)).with_context(|| format!("Failed to resolve project root: {}", root))?;

  debug!(root = %root.display(), flags = ?env_args, "generating configuration");

  let env = Environment::from_args(env_args);
  let config = ConfigurationBuilder::new(&root)
    .environment(env)
    .settings(BuildSettings::from_env())
    .build();

  if format.is_json() {
    return print_json(&config);
  }

  let hash = config.compute_hash().context("Failed to compute configuration hash")?;

  print_success(&format!("Configuration: {}", hash.short()));
  print_stat("Mode", config.mode.as_str());
  print_stat("Context", &config.context.display().to_string());
  print_stat("Entry", &config.entry.display().to_string());
  print_stat("Output", &config.output.path.display().to_string());
  print_stat("Public path", &config.output.public_path);
  print_stat("Rules", &config.module.rules.len().to_string());
  println!();
  println!("Plugins:");
  for name in config.plugin_names() {
    print_item(name);
  }

  Ok(())
}
