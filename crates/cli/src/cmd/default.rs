use webcfg_lib::tasks::{DefaultOutcome, DefaultTask};

/// Run the default task and return the exit status for the process.
pub fn cmd_default() -> i32 {
  let task = DefaultTask;
  match task.run() {
    DefaultOutcome::NoDefaultTask => {
      println!("{}", task.message());
      0
    }
  }
}
