/*!
 * CPU Scheduler Simulator Library
 * Classic uniprocessor scheduling disciplines over a fixed task set
 */

pub mod cli;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod render;
pub mod request;
pub mod scheduler;

// Re-exports
pub use crate::core::{SchedulerError, SimError, SimResult};
pub use config::Config;
pub use monitoring::init_tracing;
pub use request::{SchedulerRequest, SchedulerResponse};
pub use scheduler::{
    build_tasks, simulate, Algorithm, AlgorithmKind, SchedulerStats, SimulationReport, Slice,
    Task, TaskSpec, TimeQuantum, WaitAccounting,
};
