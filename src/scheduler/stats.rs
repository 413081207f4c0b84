/*!
 * Scheduler Statistics
 * Per-run summary of a simulation
 */

use super::clock::Slice;
use super::task::Task;
use super::types::{Algorithm, AlgorithmKind};
use crate::core::types::{TaskId, Tick};
use serde::{Deserialize, Serialize};

/// Run summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerStats {
    pub algorithm: AlgorithmKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Tick>,
    pub task_count: usize,
    /// Clock value when the last task finished
    pub makespan: Tick,
    pub idle_ticks: Tick,
    pub dispatches: u64,
    pub preemptions: u64,
    pub total_waiting_time: Tick,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

impl SchedulerStats {
    pub(super) fn collect(
        algorithm: &Algorithm,
        tasks: &[Task],
        makespan: Tick,
        idle_ticks: Tick,
        dispatches: u64,
        preemptions: u64,
    ) -> Self {
        let total_waiting_time = tasks
            .iter()
            .map(|t| t.waiting_time)
            .fold(0, Tick::saturating_add);
        let total_turnaround = tasks
            .iter()
            .map(Task::turnaround_time)
            .fold(0, Tick::saturating_add);

        Self {
            algorithm: algorithm.kind(),
            quantum: algorithm.quantum().map(|q| q.ticks()),
            task_count: tasks.len(),
            makespan,
            idle_ticks,
            dispatches,
            preemptions,
            total_waiting_time,
            average_waiting_time: mean(total_waiting_time, tasks.len()),
            average_turnaround_time: mean(total_turnaround, tasks.len()),
        }
    }
}

fn mean(total: Tick, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Everything a run produces besides the in-place task updates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub stats: SchedulerStats,
    pub slices: Vec<Slice>,
}

impl SimulationReport {
    /// Dispatch intervals of one task, in time order
    pub fn slices_for(&self, task_id: TaskId) -> impl Iterator<Item = &Slice> + '_ {
        self.slices.iter().filter(move |s| s.task_id == task_id)
    }

    /// Task ids in the order they first got the CPU
    pub fn dispatch_order(&self) -> Vec<TaskId> {
        let mut order = Vec::new();
        for slice in &self.slices {
            if !order.contains(&slice.task_id) {
                order.push(slice.task_id);
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_has_zero_averages() {
        let stats = SchedulerStats::collect(&Algorithm::Fcfs, &[], 0, 0, 0, 0);
        assert_eq!(stats.task_count, 0);
        assert_eq!(stats.average_waiting_time, 0.0);
        assert_eq!(stats.average_turnaround_time, 0.0);
        assert_eq!(stats.quantum, None);
    }

    #[test]
    fn test_averages() {
        let mut a = Task::new(1, 0, 2, 0);
        a.completion_time = 2;
        let mut b = Task::new(2, 0, 2, 0);
        b.completion_time = 4;
        b.waiting_time = 2;

        let stats = SchedulerStats::collect(&Algorithm::Sjf, &[a, b], 4, 0, 2, 0);
        assert_eq!(stats.total_waiting_time, 2);
        assert_eq!(stats.average_waiting_time, 1.0);
        assert_eq!(stats.average_turnaround_time, 3.0);
    }

    #[test]
    fn test_totals_saturate() {
        let mut a = Task::new(1, 0, 1, 0);
        a.completion_time = Tick::MAX;
        a.waiting_time = Tick::MAX - 1;
        let b = a.clone();

        let stats = SchedulerStats::collect(&Algorithm::Fcfs, &[a, b], Tick::MAX, 0, 2, 0);
        assert_eq!(stats.total_waiting_time, Tick::MAX);
        assert_eq!(stats.average_turnaround_time, Tick::MAX as f64 / 2.0);
    }

    #[test]
    fn test_dispatch_order_deduplicates() {
        let report = SimulationReport {
            stats: SchedulerStats::collect(&Algorithm::Fcfs, &[], 0, 0, 0, 0),
            slices: vec![
                Slice { task_id: 2, start: 0, end: 1 },
                Slice { task_id: 1, start: 1, end: 2 },
                Slice { task_id: 2, start: 2, end: 3 },
            ],
        };
        assert_eq!(report.dispatch_order(), vec![2, 1]);
        assert_eq!(report.slices_for(2).count(), 2);
    }
}
