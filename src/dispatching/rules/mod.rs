//! Built-in dispatching rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `EarliestArrival` | arrival | FCFS ordering, tie-breaking |
//! | `ShortestBurst` | burst | SJF |
//! | `ShortestRemaining` | remaining | SRTF |
//! | `HighestPriority` | priority (lower first) | Priority |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// First In, First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total service time.
/// Minimizes mean waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Prioritizes processes with the least unexecuted work.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Static priority.
///
/// Lower priority value = dispatched first. Processes without a priority
/// sort last.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority.map_or(RuleScore::MAX, RuleScore::from)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}
