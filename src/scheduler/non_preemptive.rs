/*!
 * Non-Preemptive Selection Schedulers
 * Shortest-job-first and static priority share one decision loop
 */

use super::clock::VirtualClock;
use super::stats::SimulationReport;
use super::task::{sort_by_arrival, Task};
use super::types::Algorithm;
use std::cmp::Ordering;

/// Shortest job first: among arrived tasks, the smallest burst runs next
pub fn sjf(tasks: &mut [Task]) -> SimulationReport {
    run_by_selection(tasks, &Algorithm::Sjf, |candidate, best| {
        // Smaller burst is better, so reverse the natural order
        best.burst_time.cmp(&candidate.burst_time)
    })
}

/// Static priority: among arrived tasks, the highest priority number runs next
pub fn priority(tasks: &mut [Task]) -> SimulationReport {
    run_by_selection(tasks, &Algorithm::Priority, |candidate, best| {
        candidate.priority.cmp(&best.priority)
    })
}

/// Shared decision loop
///
/// At each decision point scan the arrived, unfinished tasks in arrival order and
/// keep the first one that no later candidate strictly beats. `beats` returns
/// `Ordering::Greater` when `candidate` should replace `best`. With nothing
/// eligible the clock jumps to the earliest pending arrival.
fn run_by_selection<F>(tasks: &mut [Task], algorithm: &Algorithm, beats: F) -> SimulationReport
where
    F: Fn(&Task, &Task) -> Ordering,
{
    sort_by_arrival(tasks);
    let mut clock = VirtualClock::new();
    let mut completed = vec![false; tasks.len()];
    let mut remaining = tasks.len();

    while remaining > 0 {
        let now = clock.now();
        let mut selected: Option<usize> = None;

        for (index, task) in tasks.iter().enumerate() {
            if completed[index] || task.arrival_time > now {
                continue;
            }
            match selected {
                Some(best) if beats(task, &tasks[best]) != Ordering::Greater => {}
                _ => selected = Some(index),
            }
        }

        let Some(index) = selected else {
            let next_arrival = tasks
                .iter()
                .zip(&completed)
                .filter(|(_, done)| !**done)
                .map(|(task, _)| task.arrival_time)
                .min();
            match next_arrival {
                Some(instant) => clock.idle_until(instant),
                None => break,
            }
            continue;
        };

        let task = &mut tasks[index];
        task.run_to_completion(now);
        clock.dispatch(task.id, task.burst_time);
        completed[index] = true;
        remaining -= 1;
    }

    clock.finish(algorithm, tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_by_completion(tasks: &[Task]) -> Vec<u32> {
        let mut sorted: Vec<_> = tasks.iter().collect();
        sorted.sort_by_key(|t| t.completion_time);
        sorted.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let mut tasks = vec![
            Task::new(1, 0, 6, 0),
            Task::new(2, 0, 2, 0),
            Task::new(3, 0, 4, 0),
        ];
        sjf(&mut tasks);
        assert_eq!(ids_by_completion(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_sjf_tie_keeps_scan_order() {
        let mut tasks = vec![
            Task::new(5, 0, 3, 0),
            Task::new(6, 0, 3, 0),
            Task::new(7, 0, 3, 0),
        ];
        sjf(&mut tasks);
        assert_eq!(ids_by_completion(&tasks), vec![5, 6, 7]);
    }

    #[test]
    fn test_sjf_does_not_wait_for_shorter_future_job() {
        let mut tasks = vec![Task::new(1, 0, 5, 0), Task::new(2, 1, 1, 0)];
        sjf(&mut tasks);
        assert_eq!(tasks[0].completion_time, 5);
        assert_eq!(tasks[1].completion_time, 6);
        assert_eq!(tasks[1].waiting_time, 4);
    }

    #[test]
    fn test_priority_higher_number_wins() {
        let mut tasks = vec![
            Task::new(1, 0, 1, 3),
            Task::new(2, 0, 1, 8),
            Task::new(3, 0, 1, 5),
        ];
        priority(&mut tasks);
        assert_eq!(ids_by_completion(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_tie_keeps_scan_order() {
        let mut tasks = vec![Task::new(1, 0, 2, 4), Task::new(2, 0, 2, 4)];
        priority(&mut tasks);
        assert_eq!(ids_by_completion(&tasks), vec![1, 2]);
    }

    #[test]
    fn test_negative_priorities() {
        let mut tasks = vec![Task::new(1, 0, 1, -5), Task::new(2, 0, 1, -1)];
        priority(&mut tasks);
        assert_eq!(ids_by_completion(&tasks), vec![2, 1]);
    }

    #[test]
    fn test_idle_ticks_until_first_arrival() {
        let mut tasks = vec![Task::new(1, 3, 2, 0), Task::new(2, 10, 1, 0)];
        let report = sjf(&mut tasks);

        assert_eq!(tasks[0].completion_time, 5);
        assert_eq!(tasks[0].waiting_time, 0);
        assert_eq!(tasks[1].completion_time, 11);
        assert_eq!(report.stats.idle_ticks, 8);
        assert_eq!(report.stats.makespan, 11);
    }

    #[test]
    fn test_large_arrival_gap_is_skipped() {
        let far = 3_000_000_000;
        let mut tasks = vec![Task::new(1, far, 1, 0), Task::new(2, far + 50, 2, 1)];
        let report = priority(&mut tasks);

        assert_eq!(tasks[0].completion_time, far + 1);
        assert_eq!(tasks[1].completion_time, far + 52);
        assert_eq!(tasks[1].waiting_time, 0);
        assert_eq!(report.stats.idle_ticks, far + 49);

        let mut tasks = vec![Task::new(1, far, 1, 0)];
        let report = sjf(&mut tasks);
        assert_eq!(report.stats.makespan, far + 1);
        assert_eq!(report.stats.idle_ticks, far);
    }
}
