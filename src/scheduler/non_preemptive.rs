//! Non-preemptive selection policies: SJF and static priority.
//!
//! # Algorithm
//!
//! At each decision point (t=0, after a completion, or after an idle skip):
//! 1. Collect unfinished processes with `arrival <= clock`.
//! 2. If none, idle up to the next arrival.
//! 3. Otherwise select the best by the rule engine and run it to completion.
//!
//! The two policies differ only in their rule chain:
//!
//! | Policy | Keys |
//! |--------|------|
//! | SJF | burst, arrival, final tie-breaker |
//! | Priority | priority, arrival, final tie-breaker |
//!
//! # Complexity
//! O(n²): one linear scan of the ready set per dispatch.

use log::debug;

use super::state::{next_arrival, ready_indices, SimState};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Process, Timeline};

/// Rule chain for shortest-job-first.
pub(crate) fn sjf_engine(tie_breaker: TieBreaker) -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::ShortestBurst)
        .with_tie_breaker(rules::EarliestArrival)
        .with_final_tie_breaker(tie_breaker)
}

/// Rule chain for static priority.
pub(crate) fn priority_engine(tie_breaker: TieBreaker) -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::HighestPriority)
        .with_tie_breaker(rules::EarliestArrival)
        .with_final_tie_breaker(tie_breaker)
}

/// Runs processes to completion one at a time, chosen by `engine`.
pub(crate) fn schedule(processes: &mut [Process], engine: &RuleEngine) -> Timeline {
    let mut state = SimState::new();

    while state.finished() < processes.len() {
        let clock = state.clock();
        let ctx = SchedulingContext::at_time(clock);

        match engine.select_best(processes, ready_indices(processes, clock), &ctx) {
            Some(idx) => {
                let process = &mut processes[idx];
                debug!(
                    "{:?}: dispatch {} at t={} for {}",
                    engine.rule_names(),
                    process.id,
                    clock,
                    process.remaining
                );
                state.run_to_completion(process);
            }
            None => match next_arrival(processes, clock) {
                Some(arrival) => state.idle_until(arrival),
                None => break,
            },
        }
    }

    state.into_timeline()
}
