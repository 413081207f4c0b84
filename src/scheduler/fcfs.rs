/*!
 * First-Come-First-Served
 */

use super::clock::VirtualClock;
use super::stats::SimulationReport;
use super::task::{sort_by_arrival, Task};
use super::types::Algorithm;

/// Run tasks strictly in arrival order, each to completion
///
/// The clock jumps over idle gaps to the next arrival.
pub fn fcfs(tasks: &mut [Task]) -> SimulationReport {
    sort_by_arrival(tasks);
    let mut clock = VirtualClock::new();

    for task in tasks.iter_mut() {
        clock.idle_until(task.arrival_time);
        task.run_to_completion(clock.now());
        clock.dispatch(task.id, task.burst_time);
    }

    clock.finish(&Algorithm::Fcfs, tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_single_task_does_not_wait() {
        let mut tasks = vec![Task::new(1, 5, 3, 0)];
        let report = fcfs(&mut tasks);

        assert_eq!(tasks[0].waiting_time, 0);
        assert_eq!(tasks[0].completion_time, 8);
        assert_eq!(report.stats.idle_ticks, 5);
    }

    #[test]
    fn test_ignores_burst_length() {
        let mut tasks = vec![Task::new(1, 0, 10, 0), Task::new(2, 1, 1, 0)];
        fcfs(&mut tasks);

        assert_eq!(tasks[0].completion_time, 10);
        assert_eq!(tasks[1].completion_time, 11);
        assert_eq!(tasks[1].waiting_time, 9);
    }

    #[test]
    fn test_empty() {
        let mut tasks: Vec<Task> = Vec::new();
        let report = fcfs(&mut tasks);
        assert!(report.slices.is_empty());
        assert_eq!(report.stats.makespan, 0);
    }
}
