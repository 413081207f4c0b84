/*!
 * Scheduling Requests
 * Typed request/response bodies for driving the simulator from JSON
 */

use crate::core::errors::SchedulerError;
use crate::scheduler::{
    build_tasks, simulate, Algorithm, AlgorithmKind, SimulationReport, Task, TaskSpec,
    TimeQuantum, WaitAccounting,
};
use serde::{Deserialize, Serialize};

/// Request body: algorithm token, task list, and quantum (only read for `rr`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerRequest {
    pub algorithm: String,
    pub tasks: Vec<TaskSpec>,
    #[serde(default)]
    pub quantum: i64,
    #[serde(default)]
    pub wait_accounting: WaitAccounting,
}

impl SchedulerRequest {
    /// Resolve the algorithm selector, validating the quantum for round-robin
    pub fn algorithm(&self) -> Result<Algorithm, SchedulerError> {
        let kind: AlgorithmKind = self.algorithm.parse()?;
        let quantum = if kind.needs_quantum() {
            Some(TimeQuantum::new(self.quantum)?)
        } else {
            None
        };
        Ok(Algorithm::from_kind(kind, quantum)?.with_accounting(self.wait_accounting))
    }

    /// Validate everything, then run the simulation
    ///
    /// Nothing is simulated unless the algorithm, quantum, and task set are all valid.
    pub fn execute(&self) -> Result<(Vec<Task>, SimulationReport), SchedulerError> {
        let algorithm = self.algorithm()?;
        let mut tasks = build_tasks(&self.tasks)?;
        let report = simulate(&mut tasks, &algorithm);
        Ok((tasks, report))
    }
}

/// Response body: scheduled tasks or an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchedulerResponse {
    Tasks { tasks: Vec<Task> },
    Error { error: SchedulerError },
}

impl From<Result<(Vec<Task>, SimulationReport), SchedulerError>> for SchedulerResponse {
    fn from(result: Result<(Vec<Task>, SimulationReport), SchedulerError>) -> Self {
        match result {
            Ok((tasks, _)) => SchedulerResponse::Tasks { tasks },
            Err(error) => SchedulerResponse::Error { error },
        }
    }
}
