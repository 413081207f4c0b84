/*!
 * Rendering
 * Output encodings for scheduled tasks
 */

mod json;
mod table;

pub use json::tasks_to_json;
pub use table::{accent, render_table, title};
