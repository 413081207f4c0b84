/*!
 * JSON Rendering
 * Machine-readable task results
 */

use crate::core::types::SimResult;
use crate::scheduler::Task;

/// Encode tasks as a compact JSON array, one object per task with all seven fields
pub fn tasks_to_json(tasks: &[Task]) -> SimResult<String> {
    Ok(serde_json::to_string(tasks)?)
}
