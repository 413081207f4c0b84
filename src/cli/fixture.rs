/*!
 * Default Task Set
 */

use crate::scheduler::TaskSpec;

/// Built-in demo tasks: (id, arrival, burst, priority)
pub const DEFAULT_TASKS: [TaskSpec; 4] = [
    TaskSpec::new(1, 0, 8, 2),
    TaskSpec::new(2, 1, 4, 1),
    TaskSpec::new(3, 2, 9, 4),
    TaskSpec::new(4, 3, 5, 3),
];

pub fn default_tasks() -> Vec<TaskSpec> {
    DEFAULT_TASKS.to_vec()
}
