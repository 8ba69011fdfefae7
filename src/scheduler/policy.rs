//! Scheduling policy selection.
//!
//! The five disciplines are variants of one capability: a process set plus
//! parameters in, a finalized process set plus timeline out. `Policy` is
//! the tagged dispatch over them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{fcfs, non_preemptive, round_robin, srtf};
use crate::dispatching::TieBreaker;
use crate::error::SchedError;
use crate::models::{Process, Timeline};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Static priority, non-preemptive (lower value first).
    Priority,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// All five policies, using `quantum` for round-robin.
    pub fn all(quantum: i64) -> [Policy; 5] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srtf,
            Policy::Priority,
            Policy::RoundRobin { quantum },
        ]
    }

    /// Parses a policy selector.
    ///
    /// Accepts (case-insensitive) `fcfs`, `sjf`, `srtf`, `priority`,
    /// `rr`/`round_robin`/`round-robin`, or the menu numbers `1`..=`5` in
    /// that order. `quantum` is required for round-robin and ignored
    /// otherwise.
    ///
    /// # Errors
    /// - `UnknownPolicy` if the selector names no policy.
    /// - `InvalidInput` if round-robin is selected without a quantum.
    pub fn parse(selector: &str, quantum: Option<i64>) -> Result<Self, SchedError> {
        let normalized = selector.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "fcfs" => Ok(Policy::Fcfs),
            "2" | "sjf" => Ok(Policy::Sjf),
            "3" | "srtf" => Ok(Policy::Srtf),
            "4" | "priority" => Ok(Policy::Priority),
            "5" | "rr" | "round_robin" | "round-robin" => match quantum {
                Some(quantum) => Ok(Policy::RoundRobin { quantum }),
                None => Err(SchedError::InvalidInput(vec![ValidationError::new(
                    ValidationErrorKind::MissingQuantum,
                    "Round-robin requires a time quantum",
                )])),
            },
            _ => Err(SchedError::UnknownPolicy(selector.to_string())),
        }
    }

    /// Short policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::Priority => "Priority",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come, First-Served",
            Policy::Sjf => "Shortest Job First (Non-preemptive)",
            Policy::Srtf => "Shortest Remaining Time First (Preemptive)",
            Policy::Priority => "Priority Scheduling (Non-preemptive)",
            Policy::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the processor before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin { .. })
    }

    /// Runs this policy on a private copy of `processes`.
    ///
    /// The input is never mutated; the returned processes keep input order
    /// and carry completion metrics. Input is assumed valid (see
    /// [`crate::validation::validate_input`]); a zero-burst process still
    /// terminates, finishing without a timeline slice.
    pub fn apply(&self, processes: &[Process], tie_breaker: TieBreaker) -> (Vec<Process>, Timeline) {
        let mut working: Vec<Process> = processes.to_vec();
        for p in &mut working {
            p.reset();
            // Negative bursts are rejected by validation; clamp so an
            // unvalidated call still terminates.
            p.remaining = p.remaining.max(0);
        }

        let timeline = match *self {
            Policy::Fcfs => fcfs::schedule(&mut working, tie_breaker),
            Policy::Sjf => {
                non_preemptive::schedule(&mut working, &non_preemptive::sjf_engine(tie_breaker))
            }
            Policy::Srtf => srtf::schedule(&mut working, tie_breaker),
            Policy::Priority => non_preemptive::schedule(
                &mut working,
                &non_preemptive::priority_engine(tie_breaker),
            ),
            Policy::RoundRobin { quantum } => {
                round_robin::schedule(&mut working, quantum.max(1), tie_breaker)
            }
        };

        (working, timeline)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// First-Come, First-Served over a copy of `processes`.
pub fn schedule_fcfs(processes: &[Process]) -> (Vec<Process>, Timeline) {
    Policy::Fcfs.apply(processes, TieBreaker::default())
}

/// Non-preemptive Shortest Job First over a copy of `processes`.
pub fn schedule_sjf(processes: &[Process]) -> (Vec<Process>, Timeline) {
    Policy::Sjf.apply(processes, TieBreaker::default())
}

/// Shortest Remaining Time First over a copy of `processes`.
pub fn schedule_srtf(processes: &[Process]) -> (Vec<Process>, Timeline) {
    Policy::Srtf.apply(processes, TieBreaker::default())
}

/// Non-preemptive static priority over a copy of `processes`.
pub fn schedule_priority(processes: &[Process]) -> (Vec<Process>, Timeline) {
    Policy::Priority.apply(processes, TieBreaker::default())
}

/// Round-Robin with `quantum` over a copy of `processes`.
pub fn schedule_round_robin(processes: &[Process], quantum: i64) -> (Vec<Process>, Timeline) {
    Policy::RoundRobin { quantum }.apply(processes, TieBreaker::default())
}
