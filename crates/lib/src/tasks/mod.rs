//! Task export for the task runner.
//!
//! Tasks are exposed under their display names. Two names are reserved:
//! `build` is left undefined for the consuming package to provide, and
//! `default` reports that there is nothing to run.
//!
//! Every task is validated before anything is exported, so a nameless task
//! leaves the target untouched.

mod manifest;
mod types;

use thiserror::Error;
use tracing::{debug, warn};

pub use manifest::{ManifestError, load_manifest};
pub use types::*;

use crate::consts::{BUILD_TASK, DEFAULT_TASK};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
  #[error("task at position {index} is missing a display name")]
  MissingDisplayName { index: usize },
}

/// Build a fresh export mapping from `tasks`.
pub fn export_tasks<T, I>(tasks: I) -> Result<TaskExports<T>, TaskError>
where
  T: NamedTask,
  I: IntoIterator<Item = T>,
{
  let mut exports = TaskExports::new();
  install(&mut exports, tasks)?;
  Ok(exports)
}

/// Merge `tasks` into `target`.
///
/// Later tasks overwrite earlier ones with the same name. On error `target`
/// is left as it was.
pub fn install<T, I>(target: &mut TaskExports<T>, tasks: I) -> Result<(), TaskError>
where
  T: NamedTask,
  I: IntoIterator<Item = T>,
{
  let named = validate(tasks)?;

  for (name, task) in named {
    if target.insert(name.clone(), TaskEntry::Task(task)).is_some() {
      warn!(task = %name, "task name already exported, replacing");
    } else {
      debug!(task = %name, "exported task");
    }
  }

  target.insert(BUILD_TASK.to_string(), TaskEntry::Undefined);
  target.insert(DEFAULT_TASK.to_string(), TaskEntry::Default(DefaultTask));

  Ok(())
}

fn validate<T, I>(tasks: I) -> Result<Vec<(String, T)>, TaskError>
where
  T: NamedTask,
  I: IntoIterator<Item = T>,
{
  tasks
    .into_iter()
    .enumerate()
    .map(|(index, task)| {
      let name = task.display_name().filter(|n| !n.is_empty()).map(str::to_string);
      match name {
        Some(name) => Ok((name, task)),
        None => Err(TaskError::MissingDisplayName { index }),
      }
    })
    .collect()
}
