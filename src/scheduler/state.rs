//! Per-run simulation state shared by all policies.
//!
//! Holds the logical clock and the timeline being built. Every policy owns
//! one `SimState` for the duration of a single run; nothing here outlives it.

use crate::models::{Process, Timeline};

#[derive(Debug, Default)]
pub(crate) struct SimState {
    clock: i64,
    timeline: Timeline,
    finished: usize,
}

impl SimState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current clock.
    #[inline]
    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    /// Number of processes finalized so far.
    #[inline]
    pub(crate) fn finished(&self) -> usize {
        self.finished
    }

    /// Advances the clock to `until`, recording the gap as idle.
    ///
    /// No-op when `until` is not in the future.
    pub(crate) fn idle_until(&mut self, until: i64) {
        if until > self.clock {
            self.timeline.push_idle(self.clock, until);
            self.clock = until;
        }
    }

    /// Runs `process` for `ticks` units starting at the current clock.
    ///
    /// Finalizes the process when its remaining work reaches zero. A
    /// zero-tick run records no slice but still finalizes a process with
    /// nothing left to do.
    pub(crate) fn run(&mut self, process: &mut Process, ticks: i64) {
        debug_assert!(
            (0..=process.remaining).contains(&ticks),
            "cannot run {} for {ticks} ticks with {} remaining",
            process.id,
            process.remaining
        );
        let start = self.clock;
        self.clock += ticks;
        process.remaining -= ticks;
        self.timeline.push_process(&process.id, start, self.clock);

        if process.remaining == 0 && !process.is_finished() {
            process.finalize(self.clock);
            self.finished += 1;
        }
    }

    /// Runs `process` until it has no work left.
    pub(crate) fn run_to_completion(&mut self, process: &mut Process) {
        let ticks = process.remaining;
        self.run(process, ticks);
    }

    pub(crate) fn into_timeline(self) -> Timeline {
        self.timeline
    }
}

/// Indices of processes that are unfinished and have arrived by `clock`.
pub(crate) fn ready_indices(processes: &[Process], clock: i64) -> impl Iterator<Item = usize> + '_ {
    processes
        .iter()
        .enumerate()
        .filter(move |(_, p)| p.is_ready(clock))
        .map(|(i, _)| i)
}

/// Earliest arrival strictly after `clock` among unfinished processes.
pub(crate) fn next_arrival(processes: &[Process], clock: i64) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_finished() && p.arrival > clock)
        .map(|p| p.arrival)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;

    #[test]
    fn test_idle_then_run() {
        let mut p = Process::new("P1", 3, 2);
        let mut state = SimState::new();
        state.idle_until(p.arrival);
        state.run_to_completion(&mut p);

        assert_eq!(state.clock(), 5);
        assert_eq!(state.finished(), 1);
        assert_eq!(p.completion, Some(5));
        assert_eq!(
            state.into_timeline().slices(),
            &[Slice::idle(0, 3), Slice::process("P1", 3, 5)]
        );
    }

    #[test]
    fn test_idle_until_past_is_noop() {
        let mut state = SimState::new();
        state.idle_until(4);
        state.idle_until(2);
        assert_eq!(state.clock(), 4);
        assert_eq!(state.into_timeline().len(), 1);
    }

    #[test]
    fn test_partial_run_does_not_finalize() {
        let mut p = Process::new("P1", 0, 5);
        let mut state = SimState::new();
        state.run(&mut p, 2);
        assert_eq!(p.remaining, 3);
        assert!(!p.is_finished());
        assert_eq!(state.finished(), 0);
    }

    #[test]
    fn test_zero_burst_finalizes_without_slice() {
        let mut p = Process::new("P0", 0, 0);
        let mut state = SimState::new();
        state.run_to_completion(&mut p);
        assert_eq!(p.completion, Some(0));
        assert_eq!(p.waiting, Some(0));
        assert_eq!(state.finished(), 1);
        assert!(state.into_timeline().is_empty());
    }

    #[test]
    fn test_ready_and_next_arrival() {
        let mut processes = vec![
            Process::new("P1", 0, 1),
            Process::new("P2", 4, 1),
            Process::new("P3", 2, 1),
        ];
        assert_eq!(ready_indices(&processes, 2).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(next_arrival(&processes, 2), Some(4));

        processes[1].finalize(5);
        assert_eq!(next_arrival(&processes, 2), None);
    }
}
