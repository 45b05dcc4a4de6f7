mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// webcfg - bundler and task runner configuration generator
#[derive(Parser)]
#[command(name = "webcfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate the bundler configuration for a project
  Config {
    /// Project root directory
    #[arg(default_value = ".")]
    root: String,

    /// Environment flag, e.g. `production`, `analyze` or `server=staging`
    #[arg(short, long = "env", value_name = "FLAG")]
    env: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// List the tasks exported from a task manifest
  Tasks {
    /// Path to a JSON array of task descriptors
    manifest: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Run the default task
  Default,

  /// Show the effective settings after environment overrides
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Config { root, env, format } => cmd::cmd_config(&root, &env, format),
    Commands::Tasks { manifest, format } => cmd::cmd_tasks(&manifest, format),
    Commands::Default => std::process::exit(cmd::cmd_default()),
    Commands::Info => {
      cmd::cmd_info();
      Ok(())
    }
  }
}
