//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (ties: final tie-breaker).
//! 2. Dispatch in that fixed order, each to completion, idling up to a
//!    process's arrival when the clock is behind it.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.

use log::debug;

use super::state::SimState;
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Process, Timeline};

pub(crate) fn schedule(processes: &mut [Process], tie_breaker: TieBreaker) -> Timeline {
    let engine = RuleEngine::new()
        .with_rule(rules::EarliestArrival)
        .with_final_tie_breaker(tie_breaker);
    let order = engine.sort_indices(processes, &SchedulingContext::at_time(0));

    let mut state = SimState::new();
    for idx in order {
        let process = &mut processes[idx];
        state.idle_until(process.arrival);
        debug!(
            "FCFS: dispatch {} at t={} for {}",
            process.id,
            state.clock(),
            process.remaining
        );
        state.run_to_completion(process);
    }
    state.into_timeline()
}
