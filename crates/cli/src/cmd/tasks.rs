//! Implementation of the `webcfg tasks` command.
//!
//! Loads a task manifest and prints the names the task runner would expose.

use std::path::Path;

use anyhow::{Context, Result};

use webcfg_lib::tasks::{TaskEntry, export_tasks, load_manifest};

use crate::output::{OutputFormat, print_item, print_json, print_success};

pub fn cmd_tasks(manifest: &str, format: OutputFormat) -> Result<()> {
  let tasks = load_manifest(Path::new(manifest))?;
  let exports = export_tasks(tasks).context("Failed to export tasks")?;

  if format.is_json() {
    return print_json(&exports);
  }

  print_success(&format!("Exported {} task(s)", exports.len()));
  for (name, entry) in &exports {
    let line = match entry {
      TaskEntry::Task(task) => match &task.description {
        Some(description) => format!("{} ({})", name, description),
        None => name.clone(),
      },
      TaskEntry::Undefined => format!("{} (undefined)", name),
      TaskEntry::Default(_) => format!("{} (no default task)", name),
    };
    print_item(&line);
  }

  Ok(())
}
