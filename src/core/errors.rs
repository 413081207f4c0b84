/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::TaskId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
///
/// Every variant is raised before a simulation starts; the algorithms themselves never fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid algorithm '{0}'")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Use one of: fcfs, sjf, priority, rr.")
    )]
    UnknownAlgorithm(String),

    #[error("Round Robin requires a quantum value")]
    #[diagnostic(
        code(scheduler::missing_quantum),
        help("Pass a positive integer quantum after 'rr', e.g. `rr 2`.")
    )]
    MissingQuantum,

    #[error("Invalid quantum: {0} (must be a positive integer)")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The time quantum is the largest slice a task may run before it is requeued.")
    )]
    InvalidQuantum(String),

    #[error("Invalid task {id}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_task),
        help("Every task needs a burst time of at least one tick, and the whole set must finish before the clock overflows.")
    )]
    InvalidTask { id: TaskId, reason: String },

    #[error("Duplicate task id {0}")]
    #[diagnostic(
        code(scheduler::duplicate_task_id),
        help("Task ids identify results and must be unique within one run.")
    )]
    DuplicateTaskId(TaskId),
}

/// Unified simulator error with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error on {path}: {message}")]
    #[diagnostic(
        code(sim::io_error),
        help("Check that the file exists and is readable.")
    )]
    Io { path: String, message: String },

    #[error("Malformed JSON: {0}")]
    #[diagnostic(
        code(sim::json_error),
        help("Tasks are an array of objects with id, arrival_time, burst_time and priority.")
    )]
    Json(String),

    #[error("{0}")]
    #[diagnostic(code(sim::usage))]
    Usage(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Json(err.to_string())
    }
}

impl SimError {
    /// Process exit status for this error
    ///
    /// Usage mistakes (bad algorithm, missing quantum, unknown flag) exit with 1,
    /// bad input files and invalid task sets with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            SimError::Usage(_) => 1,
            SimError::Scheduler(
                SchedulerError::UnknownAlgorithm(_)
                | SchedulerError::MissingQuantum
                | SchedulerError::InvalidQuantum(_),
            ) => 1,
            SimError::Scheduler(_) | SimError::Io { .. } | SimError::Json(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_error_serialization() {
        let err = SchedulerError::UnknownAlgorithm("lottery".into());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"error_type":"unknown_algorithm","details":"lottery"}"#
        );

        let back: SchedulerError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SimError::from(SchedulerError::MissingQuantum).exit_code(), 1);
        assert_eq!(SimError::Usage("bad flag".into()).exit_code(), 1);
        assert_eq!(SimError::from(SchedulerError::DuplicateTaskId(3)).exit_code(), 2);
        assert_eq!(SimError::Json("eof".into()).exit_code(), 2);
    }
}
