/*!
 * Task Records
 * Input specs and the mutable per-run task state
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Priority, TaskId, Tick};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Caller-supplied task description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: TaskId,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
}

impl TaskSpec {
    pub const fn new(id: TaskId, arrival_time: Tick, burst_time: Tick, priority: Priority) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Task state for one simulation run
///
/// `remaining_time` starts at `burst_time`; `completion_time` and `waiting_time`
/// start at zero and are written by the scheduling algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub priority: Priority,
    pub completion_time: Tick,
    pub waiting_time: Tick,
    pub remaining_time: Tick,
}

impl Task {
    pub fn new(id: TaskId, arrival_time: Tick, burst_time: Tick, priority: Priority) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            completion_time: 0,
            waiting_time: 0,
            remaining_time: burst_time,
        }
    }

    /// Time from arrival to completion
    #[inline]
    pub fn turnaround_time(&self) -> Tick {
        self.completion_time.saturating_sub(self.arrival_time)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Run the task for a whole burst starting at `start` (non-preemptive dispatch)
    pub(super) fn run_to_completion(&mut self, start: Tick) {
        self.completion_time = start + self.burst_time;
        self.waiting_time = start - self.arrival_time;
        self.remaining_time = 0;
    }

    /// Restore the pre-run state so the same records can be scheduled again
    pub fn reset(&mut self) {
        self.completion_time = 0;
        self.waiting_time = 0;
        self.remaining_time = self.burst_time;
    }
}

impl From<TaskSpec> for Task {
    fn from(spec: TaskSpec) -> Self {
        Task::new(spec.id, spec.arrival_time, spec.burst_time, spec.priority)
    }
}

/// Validate a task set and build fresh run state from it
///
/// Rejects zero burst times, duplicate ids, and sets whose timeline would not fit
/// in a [`Tick`]; an empty set is valid.
///
/// No clock value can exceed the latest arrival plus the total burst, so keeping
/// that bound representable keeps every algorithm free of overflow.
pub fn build_tasks(specs: &[TaskSpec]) -> Result<Vec<Task>, SchedulerError> {
    let mut seen = HashSet::with_capacity(specs.len());
    let mut latest_arrival: Tick = 0;
    let mut total_burst: Tick = 0;

    specs
        .iter()
        .map(|spec| {
            if spec.burst_time == 0 {
                return Err(SchedulerError::InvalidTask {
                    id: spec.id,
                    reason: "burst_time must be positive".to_string(),
                });
            }
            if !seen.insert(spec.id) {
                return Err(SchedulerError::DuplicateTaskId(spec.id));
            }

            latest_arrival = latest_arrival.max(spec.arrival_time);
            total_burst = total_burst
                .checked_add(spec.burst_time)
                .and_then(|busy| latest_arrival.checked_add(busy).map(|_| busy))
                .ok_or_else(|| SchedulerError::InvalidTask {
                    id: spec.id,
                    reason: "arrival and burst times overflow the clock".to_string(),
                })?;

            Ok(Task::from(*spec))
        })
        .collect()
}

/// Stable sort by arrival time; equal arrivals keep their input order
pub fn sort_by_arrival(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.arrival_time);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(7, 3, 5, 2);
        assert_eq!(task.remaining_time, 5);
        assert_eq!(task.completion_time, 0);
        assert_eq!(task.waiting_time, 0);
        assert!(!task.is_finished());
    }

    #[test]
    fn test_build_tasks_rejects_zero_burst() {
        let specs = [TaskSpec::new(1, 0, 3, 1), TaskSpec::new(2, 1, 0, 1)];
        assert_eq!(
            build_tasks(&specs),
            Err(SchedulerError::InvalidTask {
                id: 2,
                reason: "burst_time must be positive".into()
            })
        );
    }

    #[test]
    fn test_build_tasks_rejects_duplicate_ids() {
        let specs = [TaskSpec::new(4, 0, 3, 1), TaskSpec::new(4, 2, 1, 1)];
        assert_eq!(build_tasks(&specs), Err(SchedulerError::DuplicateTaskId(4)));
    }

    #[test]
    fn test_build_tasks_rejects_clock_overflow() {
        let overflow = SchedulerError::InvalidTask {
            id: 1,
            reason: "arrival and burst times overflow the clock".into(),
        };
        assert_eq!(
            build_tasks(&[TaskSpec::new(1, Tick::MAX - 1, 5, 0)]),
            Err(overflow)
        );

        // Each task fits alone; together they run past the end of time
        let specs = [
            TaskSpec::new(1, 0, Tick::MAX / 2, 0),
            TaskSpec::new(2, 10, Tick::MAX / 2, 0),
        ];
        assert!(matches!(
            build_tasks(&specs),
            Err(SchedulerError::InvalidTask { id: 2, .. })
        ));
    }

    #[test]
    fn test_build_tasks_accepts_timeline_ending_at_max() {
        let mut tasks = build_tasks(&[TaskSpec::new(1, Tick::MAX - 5, 5, 0)]).unwrap();
        tasks[0].run_to_completion(Tick::MAX - 5);
        assert_eq!(tasks[0].completion_time, Tick::MAX);
        assert_eq!(tasks[0].waiting_time, 0);
    }

    #[test]
    fn test_build_tasks_empty() {
        assert_eq!(build_tasks(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_sort_is_stable_for_equal_arrivals() {
        let mut tasks = vec![
            Task::new(3, 2, 1, 0),
            Task::new(1, 0, 1, 0),
            Task::new(9, 2, 1, 0),
            Task::new(4, 2, 1, 0),
        ];
        sort_by_arrival(&mut tasks);
        let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 9, 4]);
    }

    #[test]
    fn test_reset() {
        let mut task = Task::new(1, 2, 4, 0);
        task.run_to_completion(6);
        assert_eq!(task.completion_time, 10);
        assert_eq!(task.waiting_time, 4);
        assert_eq!(task.turnaround_time(), 8);

        task.reset();
        assert_eq!(task, Task::new(1, 2, 4, 0));
    }
}
