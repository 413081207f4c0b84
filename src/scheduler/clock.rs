/*!
 * Virtual Clock
 * Shared timeline advancement for all scheduling algorithms
 */

use super::stats::{SchedulerStats, SimulationReport};
use super::task::Task;
use super::types::Algorithm;
use crate::core::types::{TaskId, Tick};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One contiguous dispatch of a task, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub task_id: TaskId,
    pub start: Tick,
    pub end: Tick,
}

impl Slice {
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Monotonic simulation clock
///
/// Time only moves forward through `idle_until` (CPU has nothing eligible) or
/// `dispatch` (a task holds the CPU). Every dispatch is logged as a [`Slice`].
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Tick,
    idle_ticks: Tick,
    preemptions: u64,
    slices: Vec<Slice>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Jump forward to `instant` if the clock is behind it
    #[inline]
    pub fn idle_until(&mut self, instant: Tick) {
        if self.now < instant {
            self.idle_ticks += instant - self.now;
            self.now = instant;
        }
    }

    /// Give the CPU to `task_id` for `duration` ticks starting now
    pub fn dispatch(&mut self, task_id: TaskId, duration: Tick) -> Slice {
        let slice = Slice {
            task_id,
            start: self.now,
            end: self.now + duration,
        };
        debug!(task_id, start = slice.start, end = slice.end, "dispatch");
        self.now = slice.end;
        self.slices.push(slice);
        slice
    }

    /// Count a task sent back to the ready queue with work left
    #[inline]
    pub fn record_preemption(&mut self) {
        self.preemptions += 1;
    }


    /// Close the run and summarize it
    pub fn finish(self, algorithm: &Algorithm, tasks: &[Task]) -> SimulationReport {
        let stats = SchedulerStats::collect(
            algorithm,
            tasks,
            self.now,
            self.idle_ticks,
            self.slices.len() as u64,
            self.preemptions,
        );
        SimulationReport {
            stats,
            slices: self.slices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_only_moves_forward() {
        let mut clock = VirtualClock::new();
        clock.idle_until(5);
        assert_eq!(clock.now(), 5);

        clock.idle_until(3);
        assert_eq!(clock.now(), 5);
        assert_eq!(clock.idle_ticks, 5);
    }

    #[test]
    fn test_dispatch_records_slices() {
        let mut clock = VirtualClock::new();
        clock.idle_until(1);
        let first = clock.dispatch(1, 3);
        let second = clock.dispatch(2, 2);

        assert_eq!(first, Slice { task_id: 1, start: 1, end: 4 });
        assert_eq!(second.duration(), 2);
        assert_eq!(clock.now(), 6);
        assert_eq!(clock.slices.len(), 2);
        assert_eq!(clock.idle_ticks, 1);
    }
}
