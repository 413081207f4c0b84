/*!
 * Configuration
 * Environment-driven settings shared by both front ends
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::scheduler::TaskSpec;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default log filter when neither RUST_LOG nor SCHED_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration
///
/// Environment variables:
/// - SCHED_TASKS_FILE: JSON task file used instead of the built-in task set
/// - SCHED_TRACE_JSON: `1`/`true` for JSON log output
/// - SCHED_LOG: default log filter (RUST_LOG still wins)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_path: Option<PathBuf>,
    pub trace_json: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_path: None,
            trace_json: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            tasks_path: lookup("SCHED_TASKS_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            trace_json: lookup("SCHED_TRACE_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.trace_json),
            log_filter: lookup("SCHED_LOG")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }

    /// Load the configured task file, if any
    pub fn load_tasks(&self) -> SimResult<Option<Vec<TaskSpec>>> {
        self.tasks_path.as_deref().map(load_task_file).transpose()
    }
}

/// Read a JSON array of task specs from disk
pub fn load_task_file(path: &Path) -> SimResult<Vec<TaskSpec>> {
    let raw = read_file(path)?;
    let specs: Vec<TaskSpec> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = specs.len(), "Loaded task file");
    Ok(specs)
}

/// Read a whole file, mapping failures to [`SimError::Io`]
pub fn read_file(path: &Path) -> SimResult<String> {
    std::fs::read_to_string(path).map_err(|e| SimError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_reads_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("SCHED_TASKS_FILE", "/tmp/tasks.json"),
            ("SCHED_TRACE_JSON", "TRUE"),
            ("SCHED_LOG", "debug"),
        ]));
        assert_eq!(config.tasks_path, Some(PathBuf::from("/tmp/tasks.json")));
        assert!(config.trace_json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_load_task_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"arrival_time":0,"burst_time":3,"priority":2}}]"#
        )
        .unwrap();

        let specs = load_task_file(file.path()).unwrap();
        assert_eq!(specs, vec![TaskSpec::new(1, 0, 3, 2)]);
    }

    #[test]
    fn test_load_task_file_errors() {
        let missing = load_task_file(Path::new("/nonexistent/tasks.json"));
        assert!(matches!(missing, Err(SimError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":1,"arrival_time":-1,"burst_time":3,"priority":2}}]"#).unwrap();
        assert!(matches!(load_task_file(file.path()), Err(SimError::Json(_))));
    }

    #[test]
    fn test_no_task_file_configured() {
        assert_eq!(Config::default().load_tasks().unwrap(), None);
    }
}
