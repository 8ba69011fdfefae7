//! Round-Robin.
//!
//! # Algorithm
//!
//! Processes are admitted to a FIFO ready queue in (arrival, tie-breaker)
//! order, and only once their arrival has passed.
//!
//! 1. If the queue is empty, idle up to the next arrival.
//! 2. Pop the head and run it for `min(quantum, remaining)` ticks.
//! 3. Admit everything that arrived up to the end of that slice.
//! 4. Re-queue the popped process at the tail unless it finished.
//!
//! Step 3 before step 4 means a preempted process always lines up behind
//! processes that arrived while it was running.
//!
//! # Complexity
//! O(total burst / quantum + n log n).

use std::collections::VecDeque;

use log::debug;

use super::state::SimState;
use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Process, Timeline};

/// Admits processes to the ready queue in arrival order.
struct Admission {
    order: Vec<usize>,
    next: usize,
}

impl Admission {
    fn new(processes: &[Process], tie_breaker: TieBreaker) -> Self {
        let order = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .with_final_tie_breaker(tie_breaker)
            .sort_indices(processes, &SchedulingContext::at_time(0));
        Self { order, next: 0 }
    }

    /// Pushes every not-yet-admitted process with `arrival <= clock`.
    fn admit(&mut self, processes: &[Process], clock: i64, queue: &mut VecDeque<usize>) {
        while let Some(&idx) = self.order.get(self.next) {
            if processes[idx].arrival > clock {
                break;
            }
            queue.push_back(idx);
            self.next += 1;
        }
    }

    /// Arrival time of the next process still waiting to be admitted.
    fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        self.order.get(self.next).map(|&idx| processes[idx].arrival)
    }
}

pub(crate) fn schedule(processes: &mut [Process], quantum: i64, tie_breaker: TieBreaker) -> Timeline {
    debug_assert!(quantum > 0, "quantum must be positive");
    let mut admission = Admission::new(processes, tie_breaker);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut state = SimState::new();

    while state.finished() < processes.len() {
        admission.admit(processes, state.clock(), &mut queue);

        let Some(idx) = queue.pop_front() else {
            match admission.next_arrival(processes) {
                Some(arrival) => {
                    state.idle_until(arrival);
                    continue;
                }
                None => break,
            }
        };

        let process = &mut processes[idx];
        let ticks = quantum.min(process.remaining);
        debug!(
            "RR: dispatch {} at t={} for {} (remaining {})",
            process.id,
            state.clock(),
            ticks,
            process.remaining
        );
        state.run(process, ticks);
        let finished = process.is_finished();

        admission.admit(processes, state.clock(), &mut queue);
        if !finished {
            queue.push_back(idx);
        }
    }

    state.into_timeline()
}
