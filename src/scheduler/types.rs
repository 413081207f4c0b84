/*!
 * Scheduler Types
 * Algorithm selection, time quantum and waiting-time accounting
 */

use crate::core::errors::SchedulerError;
use crate::core::types::Tick;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling discipline named on the command line or in a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// First-come-first-served
    Fcfs,
    /// Non-preemptive shortest job first
    Sjf,
    /// Non-preemptive static priority, higher number wins
    Priority,
    /// Preemptive round-robin with a fixed quantum
    RoundRobin,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [Self::Fcfs, Self::Sjf, Self::Priority, Self::RoundRobin];

    /// Canonical name token
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "rr",
        }
    }

    /// Whether the discipline needs a time quantum
    #[inline(always)]
    pub const fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for AlgorithmKind {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "shortest" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(SchedulerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AlgorithmKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlgorithmKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create a quantum, rejecting zero and negative values
    pub fn new(ticks: i64) -> Result<Self, SchedulerError> {
        if ticks <= 0 {
            return Err(SchedulerError::InvalidQuantum(ticks.to_string()));
        }
        Ok(Self(ticks as Tick))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl FromStr for TimeQuantum {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ticks: i64 = s
            .trim()
            .parse()
            .map_err(|_| SchedulerError::InvalidQuantum(s.to_string()))?;
        Self::new(ticks)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// How round-robin accumulates waiting time across dispatches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaitAccounting {
    /// Add `now - arrival_time` on every dispatch; counts the arrival offset
    /// once per requeue
    #[default]
    Cumulative,
    /// Add only the gap since the task last became ready; totals
    /// `completion - arrival - burst`
    IdleGaps,
}

impl WaitAccounting {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cumulative => "cumulative",
            Self::IdleGaps => "idle-gaps",
        }
    }
}

impl FromStr for WaitAccounting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cumulative" => Ok(Self::Cumulative),
            "idle-gaps" | "idle_gaps" | "idle" => Ok(Self::IdleGaps),
            _ => Err(format!(
                "Invalid wait accounting '{}'. Valid: cumulative, idle-gaps",
                s
            )),
        }
    }
}

/// Fully configured scheduling discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin {
        quantum: TimeQuantum,
        accounting: WaitAccounting,
    },
}

impl Algorithm {
    /// Round-robin with cumulative waiting accounting
    pub fn round_robin(quantum: TimeQuantum) -> Self {
        Self::RoundRobin {
            quantum,
            accounting: WaitAccounting::default(),
        }
    }

    /// Build from a parsed name and an optional quantum
    ///
    /// The quantum is required for round-robin and ignored otherwise.
    pub fn from_kind(
        kind: AlgorithmKind,
        quantum: Option<TimeQuantum>,
    ) -> Result<Self, SchedulerError> {
        match kind {
            AlgorithmKind::Fcfs => Ok(Self::Fcfs),
            AlgorithmKind::Sjf => Ok(Self::Sjf),
            AlgorithmKind::Priority => Ok(Self::Priority),
            AlgorithmKind::RoundRobin => quantum
                .map(Self::round_robin)
                .ok_or(SchedulerError::MissingQuantum),
        }
    }

    /// Replace the round-robin waiting accounting; no-op for other disciplines
    pub fn with_accounting(self, accounting: WaitAccounting) -> Self {
        match self {
            Self::RoundRobin { quantum, .. } => Self::RoundRobin {
                quantum,
                accounting,
            },
            other => other,
        }
    }

    pub const fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Fcfs => AlgorithmKind::Fcfs,
            Self::Sjf => AlgorithmKind::Sjf,
            Self::Priority => AlgorithmKind::Priority,
            Self::RoundRobin { .. } => AlgorithmKind::RoundRobin,
        }
    }

    pub const fn quantum(&self) -> Option<TimeQuantum> {
        match self {
            Self::RoundRobin { quantum, .. } => Some(*quantum),
            _ => None,
        }
    }
}
