//! Simulation quality metrics (KPIs).
//!
//! Aggregates the per-process metrics of a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Final clock value |
//! | Busy / Idle time | Ticks with / without a running process |
//! | Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Run-level performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Final clock value.
    pub makespan: i64,
    /// Ticks spent running processes.
    pub busy_time: i64,
    /// Ticks spent idle.
    pub idle_time: i64,
    /// busy / makespan (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Largest single waiting time.
    pub max_waiting: i64,
    /// Mean time from arrival to first dispatch.
    pub avg_response: f64,
}

impl SimulationKpi {
    /// Computes KPIs from finalized processes and their timeline.
    ///
    /// Unfinished processes are skipped in the averages.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let makespan = timeline.end();
        let idle_time = timeline.idle_time();
        let busy_time = makespan - idle_time;

        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut max_waiting: i64 = 0;
        let mut total_response: i128 = 0;
        let mut counted: usize = 0;

        for p in processes {
            let (Some(turnaround), Some(waiting)) = (p.turnaround, p.waiting) else {
                continue;
            };
            counted += 1;
            total_turnaround += i128::from(turnaround);
            total_waiting += i128::from(waiting);
            max_waiting = max_waiting.max(waiting);

            // Zero-burst processes never appear; they respond at completion.
            let first_dispatch = timeline
                .slices_for(&p.id)
                .first()
                .map(|s| s.start)
                .or(p.completion)
                .unwrap_or(p.arrival);
            total_response += i128::from(first_dispatch - p.arrival);
        }

        // Totals are summed wide; each term fits i64 but their sum may not.
        let mean = |total: i128| {
            if counted == 0 {
                0.0
            } else {
                total as f64 / counted as f64
            }
        };

        let (utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                counted as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            utilization,
            throughput,
            avg_turnaround: mean(total_turnaround),
            avg_waiting: mean(total_waiting),
            max_waiting,
            avg_response: mean(total_response),
        }
    }
}
