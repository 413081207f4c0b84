/*!
 * Command-Line Front Ends
 * Argument parsing, the interactive menu, and task-set resolution
 */

mod args;
mod fixture;
mod menu;

pub use args::{parse_args, Command, OutputFormat, USAGE};
pub use fixture::{default_tasks, DEFAULT_TASKS};
pub use menu::{Menu, MenuChoice};

use crate::config::{load_task_file, Config};
use crate::core::types::SimResult;
use crate::scheduler::TaskSpec;
use std::path::Path;

/// Pick the task set: explicit path, then SCHED_TASKS_FILE, then the built-in tasks
pub fn resolve_tasks(explicit: Option<&Path>, config: &Config) -> SimResult<Vec<TaskSpec>> {
    if let Some(path) = explicit {
        return load_task_file(path);
    }
    Ok(config.load_tasks()?.unwrap_or_else(default_tasks))
}
