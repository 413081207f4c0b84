/*!
 * Round-Robin Scheduler
 * Preemptive time slicing over a FIFO ready queue
 */

use super::clock::VirtualClock;
use super::stats::SimulationReport;
use super::task::{sort_by_arrival, Task};
use super::types::{Algorithm, TimeQuantum, WaitAccounting};
use crate::core::types::Tick;
use std::collections::VecDeque;

/// Round-robin with a fixed quantum
///
/// Each pass first admits every task that has arrived by now, then runs the queue
/// head for at most one quantum. A task with work left goes to the tail before the
/// next pass admits new arrivals, so it precedes tasks arriving at the instant it
/// was preempted.
pub fn round_robin(
    tasks: &mut [Task],
    quantum: TimeQuantum,
    accounting: WaitAccounting,
) -> SimulationReport {
    sort_by_arrival(tasks);
    let mut clock = VirtualClock::new();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(tasks.len());
    // When each task last became ready: arrival, then the end of its previous slice
    let mut ready_since: Vec<Tick> = tasks.iter().map(|t| t.arrival_time).collect();
    let mut next_arrival = 0;

    while next_arrival < tasks.len() || !ready.is_empty() {
        while next_arrival < tasks.len() && tasks[next_arrival].arrival_time <= clock.now() {
            ready.push_back(next_arrival);
            next_arrival += 1;
        }

        let Some(index) = ready.pop_front() else {
            match tasks.get(next_arrival) {
                Some(task) => clock.idle_until(task.arrival_time),
                None => break,
            }
            continue;
        };

        let now = clock.now();
        let task = &mut tasks[index];
        let execution = quantum.ticks().min(task.remaining_time);

        task.completion_time = now + execution;
        let waited = match accounting {
            WaitAccounting::Cumulative => now - task.arrival_time,
            WaitAccounting::IdleGaps => now - ready_since[index],
        };
        // Cumulative totals can outgrow the clock itself
        task.waiting_time = task.waiting_time.saturating_add(waited);
        task.remaining_time -= execution;
        clock.dispatch(task.id, execution);

        if task.remaining_time > 0 {
            ready_since[index] = clock.now();
            ready.push_back(index);
            clock.record_preemption();
        }
    }

    let algorithm = Algorithm::RoundRobin {
        quantum,
        accounting,
    };
    clock.finish(&algorithm, tasks)
}
