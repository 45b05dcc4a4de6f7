use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::NO_DEFAULT_TASK_MESSAGE;

/// A task that can be exposed to the task runner under its display name.
pub trait NamedTask {
  fn display_name(&self) -> Option<&str>;
}

/// A task as described in a task manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Remaining fields, passed through untouched.
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TaskDescriptor {
  pub fn named(name: &str) -> Self {
    Self {
      display_name: Some(name.to_string()),
      description: None,
      extra: serde_json::Map::new(),
    }
  }
}

impl NamedTask for TaskDescriptor {
  fn display_name(&self) -> Option<&str> {
    self.display_name.as_deref()
  }
}

/// Value stored under a task name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "task", rename_all = "lowercase")]
pub enum TaskEntry<T> {
  Task(T),
  /// Reserved name with no task behind it.
  Undefined,
  Default(DefaultTask),
}

impl<T> TaskEntry<T> {
  pub fn as_task(&self) -> Option<&T> {
    match self {
      Self::Task(task) => Some(task),
      _ => None,
    }
  }

  pub fn is_undefined(&self) -> bool {
    matches!(self, Self::Undefined)
  }
}

/// Task name to entry, ordered by name.
pub type TaskExports<T> = BTreeMap<String, TaskEntry<T>>;

/// The task the runner falls back to when none is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DefaultTask;

/// What running the default task means for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOutcome {
  /// Nothing to do; the host should stop with a success status.
  NoDefaultTask,
}

impl DefaultTask {
  pub fn message(&self) -> &'static str {
    NO_DEFAULT_TASK_MESSAGE
  }

  /// Report that this package defines no default task.
  pub fn run(&self) -> DefaultOutcome {
    info!("{}", self.message());
    DefaultOutcome::NoDefaultTask
  }
}
