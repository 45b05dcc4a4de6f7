//! webcfg-lib: configuration generation for a front-end bundler and task runner
//!
//! This crate assembles the configuration values handed to external build tools:
//! - `bundler`: the bundler configuration derived from a root directory and environment
//! - `settings`: explicit overrides for directories, title and base URL
//! - `environment`: the bundler `--env` flags (production, style extraction, analysis)
//! - `tasks`: the named task mapping exposed to the task runner

pub mod bundler;
pub mod consts;
pub mod environment;
pub mod probe;
pub mod settings;
pub mod tasks;
pub mod util;
