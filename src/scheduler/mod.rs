/*!
 * Scheduler Module
 * Uniprocessor scheduling simulation over a fixed task set
 *
 * Every algorithm sorts the tasks by arrival (stably), drives a shared
 * [`VirtualClock`], and writes completion and waiting times into the tasks in place.
 */

mod clock;
mod fcfs;
mod non_preemptive;
mod round_robin;
mod stats;
mod task;
pub mod types;

use tracing::{info, info_span};

// Re-export public API
pub use clock::{Slice, VirtualClock};
pub use fcfs::fcfs;
pub use non_preemptive::{priority, sjf};
pub use round_robin::round_robin;
pub use stats::{SchedulerStats, SimulationReport};
pub use task::{build_tasks, sort_by_arrival, Task, TaskSpec};
pub use types::{Algorithm, AlgorithmKind, TimeQuantum, WaitAccounting};

/// Run `algorithm` over `tasks`, updating them in place
pub fn simulate(tasks: &mut [Task], algorithm: &Algorithm) -> SimulationReport {
    let span = info_span!(
        "simulate",
        algorithm = algorithm.kind().as_str(),
        tasks = tasks.len()
    );
    let _entered = span.enter();

    let report = match *algorithm {
        Algorithm::Fcfs => fcfs(tasks),
        Algorithm::Sjf => sjf(tasks),
        Algorithm::Priority => priority(tasks),
        Algorithm::RoundRobin {
            quantum,
            accounting,
        } => round_robin(tasks, quantum, accounting),
    };

    let stats = &report.stats;
    info!(
        makespan = stats.makespan,
        idle_ticks = stats.idle_ticks,
        dispatches = stats.dispatches,
        preemptions = stats.preemptions,
        average_waiting = stats.average_waiting_time,
        "Simulation complete"
    );

    report
}
