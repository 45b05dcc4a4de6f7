mod config;
mod default;
mod info;
mod tasks;

pub use config::cmd_config;
pub use default::cmd_default;
pub use info::cmd_info;
pub use tasks::cmd_tasks;
