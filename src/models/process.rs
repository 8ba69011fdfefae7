//! Process (job) model.
//!
//! A process is the unit of work competing for the single simulated
//! processor. Input fields (arrival, burst, priority) are fixed for the
//! lifetime of a run; computed fields are written once by the engine when
//! the process finishes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2 (Scheduling Criteria)

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks on a logical clock starting at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total processor time required.
    pub burst: i64,
    /// Static priority (lower = more important). Only used by priority scheduling.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Unexecuted portion of `burst`.
    #[serde(default)]
    pub remaining: i64,
    /// Tick at which the last unit of work was executed.
    #[serde(default)]
    pub completion: Option<i64>,
    /// `completion - arrival`.
    #[serde(default)]
    pub turnaround: Option<i64>,
    /// `turnaround - burst`.
    #[serde(default)]
    pub waiting: Option<i64>,
}

impl Process {
    /// Creates a new process with the given ID, arrival and burst time.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
            remaining: burst,
            completion: None,
            turnaround: None,
            waiting: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Clears computed fields and restores `remaining` to the full burst.
    ///
    /// Every policy run starts from a reset copy, so a process set can be
    /// reused across runs without leaking state.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.completion = None;
        self.turnaround = None;
        self.waiting = None;
    }

    /// Whether the process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn is_ready(&self, clock: i64) -> bool {
        !self.is_finished() && self.arrival <= clock
    }

    /// Records completion at `completion` and derives turnaround and waiting.
    ///
    /// Metrics are computed from `burst`, never from `remaining`.
    /// Calling this on an already finished process has no effect.
    pub fn finalize(&mut self, completion: i64) {
        if self.is_finished() {
            return;
        }
        let turnaround = completion - self.arrival;
        self.remaining = 0;
        self.completion = Some(completion);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround - self.burst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 2, 5).with_priority(3);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 2);
        assert_eq!(p.burst, 5);
        assert_eq!(p.remaining, 5);
        assert_eq!(p.priority, Some(3));
        assert!(!p.is_finished());
    }

    #[test]
    fn test_finalize_metrics() {
        let mut p = Process::new("P2", 1, 3);
        p.finalize(8);
        assert_eq!(p.completion, Some(8));
        assert_eq!(p.turnaround, Some(7));
        assert_eq!(p.waiting, Some(4));
        assert_eq!(p.remaining, 0);
        assert!(p.is_finished());
    }

    #[test]
    fn test_finalize_is_write_once() {
        let mut p = Process::new("P1", 0, 2);
        p.finalize(2);
        p.finalize(10);
        assert_eq!(p.completion, Some(2));
        assert_eq!(p.waiting, Some(0));
    }

    #[test]
    fn test_is_ready() {
        let mut p = Process::new("P1", 3, 2);
        assert!(!p.is_ready(2));
        assert!(p.is_ready(3));
        p.finalize(5);
        assert!(!p.is_ready(6));
    }

    #[test]
    fn test_reset() {
        let mut p = Process::new("P1", 0, 4);
        p.remaining = 1;
        p.finalize(9);
        p.reset();
        assert_eq!(p.remaining, 4);
        assert!(p.completion.is_none());
        assert!(p.turnaround.is_none());
        assert!(p.waiting.is_none());
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P1","arrival":0,"burst":5}"#).unwrap();
        assert_eq!(p.priority, None);
        assert!(p.completion.is_none());
    }
}
