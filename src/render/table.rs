/*!
 * Table Rendering
 * Human-readable results with color-coded headers
 */

use crate::scheduler::{AlgorithmKind, SchedulerStats, Task};
use crossterm::style::{Color, Stylize};

/// Section title for an algorithm's results
pub const fn title(kind: AlgorithmKind) -> &'static str {
    match kind {
        AlgorithmKind::Fcfs => "FCFS Scheduling",
        AlgorithmKind::Sjf => "SJF Scheduling",
        AlgorithmKind::Priority => "Priority Scheduling",
        AlgorithmKind::RoundRobin => "Round Robin Scheduling",
    }
}

/// Header color for an algorithm's results
pub const fn accent(kind: AlgorithmKind) -> Color {
    match kind {
        AlgorithmKind::Fcfs => Color::Green,
        AlgorithmKind::Sjf => Color::Blue,
        AlgorithmKind::Priority => Color::Magenta,
        AlgorithmKind::RoundRobin => Color::Yellow,
    }
}

/// Render the results table followed by a one-line summary
pub fn render_table(kind: AlgorithmKind, tasks: &[Task], stats: &SchedulerStats) -> String {
    let mut out = String::new();
    let banner = format!("------ {} ------", title(kind));

    out.push_str(&format!("{}\n", banner.with(accent(kind)).bold()));
    out.push_str(&format!(
        "{}\n",
        "ID\tArrival\tBurst\tPriority\tCompletion\tWaiting".bold()
    ));
    for task in tasks {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t\t{}\t\t{}\n",
            task.id,
            task.arrival_time,
            task.burst_time,
            task.priority,
            task.completion_time,
            task.waiting_time
        ));
    }
    let summary = format!(
        "avg waiting {:.2} | avg turnaround {:.2} | makespan {} | idle {} | dispatches {}",
        stats.average_waiting_time,
        stats.average_turnaround_time,
        stats.makespan,
        stats.idle_ticks,
        stats.dispatches
    );
    out.push_str(&format!("{}\n", summary.dim()));
    out.push('\n');
    out
}
