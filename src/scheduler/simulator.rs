//! Validated simulation entry point.
//!
//! `Simulator` is the front door: it validates input against the chosen
//! policy, runs the policy on an independent copy, and packages the result.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{Policy, Simulator};
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let outcome = Simulator::new(Policy::Fcfs).run(&processes).unwrap();
//!
//! assert_eq!(outcome.makespan(), 8);
//! assert_eq!(outcome.process("P2").unwrap().waiting, Some(4));
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use super::{Policy, SimulationKpi};
use crate::dispatching::TieBreaker;
use crate::error::SchedError;
use crate::models::{Process, Timeline};
use crate::validation::validate_input;

/// Input container for a simulation run.
///
/// Deserializable, so a run can be described in a JSON document:
///
/// ```json
/// {
///   "processes": [{"id": "P1", "arrival": 0, "burst": 5}],
///   "policy": {"kind": "round_robin", "quantum": 2}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Policy to run.
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<Process>, policy: Policy) -> Self {
        Self { processes, policy }
    }

    /// Validates and runs the request with the default tie-breaker.
    pub fn simulate(&self) -> Result<SimulationOutcome, SchedError> {
        Simulator::new(self.policy).run(&self.processes)
    }
}

/// Result of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Finalized processes, in input order.
    pub processes: Vec<Process>,
    /// Execution timeline.
    pub timeline: Timeline,
}

impl SimulationOutcome {
    /// Final clock value.
    pub fn makespan(&self) -> i64 {
        self.timeline.end()
    }

    /// Finds a process by ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Run-level KPIs.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(&self.processes, &self.timeline)
    }
}

/// Validating policy runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    policy: Policy,
    tie_breaker: TieBreaker,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            tie_breaker: TieBreaker::default(),
        }
    }

    /// Sets the final tie-breaking strategy.
    ///
    /// Applies after each policy's own keys (burst, remaining, priority,
    /// then arrival) are exhausted.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Validates `processes` and runs the policy on a copy.
    ///
    /// # Errors
    /// `SchedError::InvalidInput` with every detected issue.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationOutcome, SchedError> {
        validate_input(processes, &self.policy).map_err(SchedError::InvalidInput)?;

        let (processes, timeline) = self.policy.apply(processes, self.tie_breaker);
        let outcome = SimulationOutcome {
            policy: self.policy,
            processes,
            timeline,
        };

        info!(
            "{}: {} processes, {} slices, makespan {}",
            outcome.policy,
            outcome.processes.len(),
            outcome.timeline.len(),
            outcome.makespan()
        );
        Ok(outcome)
    }
}

/// Runs all five policies over independent copies of `processes`.
///
/// Every process needs a priority, since priority scheduling is included.
///
/// # Errors
/// The first validation failure, in policy order.
pub fn simulate_all(processes: &[Process], quantum: i64) -> Result<Vec<SimulationOutcome>, SchedError> {
    Policy::all(quantum)
        .into_iter()
        .map(|policy| Simulator::new(policy).run(processes))
        .collect()
}
