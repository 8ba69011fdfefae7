//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//!
//! Unit-time stepping while work is ready. At every tick:
//! 1. Among unfinished processes with `arrival <= clock`, pick the one with
//!    the least remaining work (ties: earlier arrival, then final tie-breaker).
//! 2. Run it for one tick; finalize it if its remaining work hits zero.
//! 3. If nothing is ready, idle up to the next arrival in one step.
//!
//! The raw per-tick timeline is merged afterwards so each maximal run of
//! the same occupant becomes one slice.
//!
//! # Complexity
//! O((total burst + idle gaps) * n).

use log::trace;

use super::state::{next_arrival, ready_indices, SimState};
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Process, Timeline};

/// Rule chain for shortest-remaining-time-first.
pub(crate) fn srtf_engine(tie_breaker: TieBreaker) -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::ShortestRemaining)
        .with_tie_breaker(rules::EarliestArrival)
        .with_final_tie_breaker(tie_breaker)
}

pub(crate) fn schedule(processes: &mut [Process], tie_breaker: TieBreaker) -> Timeline {
    let engine = srtf_engine(tie_breaker);
    let mut state = SimState::new();

    while state.finished() < processes.len() {
        let clock = state.clock();
        let ctx = SchedulingContext::at_time(clock);

        match engine.select_best(processes, ready_indices(processes, clock), &ctx) {
            Some(idx) => {
                let process = &mut processes[idx];
                trace!(
                    "SRTF: t={} run {} (remaining {})",
                    clock,
                    process.id,
                    process.remaining
                );
                // Zero remaining only happens for degenerate zero-burst input;
                // a zero-tick run finalizes it in place.
                let ticks = process.remaining.min(1);
                state.run(process, ticks);
            }
            None => match next_arrival(processes, clock) {
                Some(arrival) => state.idle_until(arrival),
                None => break,
            },
        }
    }

    let mut timeline = state.into_timeline();
    timeline.merge_adjacent();
    timeline
}
