//! Single-processor scheduling engine and KPI evaluation.
//!
//! Five policies share one discrete-time model: an integer clock starting
//! at 0, a gap-free timeline, and a write-once completion record per
//! process.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst among ready |
//! | SRTF | every tick | shortest remaining among ready |
//! | Priority | no | lowest priority value among ready |
//! | Round-Robin | every quantum | FIFO ready queue |
//!
//! Ties after a policy's own key go to the earlier arrival, then to the
//! configured [`TieBreaker`](crate::dispatching::TieBreaker) (input order by
//! default).
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod policy;
mod round_robin;
mod simulator;
mod srtf;
mod state;

pub use kpi::SimulationKpi;
pub use policy::{
    schedule_fcfs, schedule_priority, schedule_round_robin, schedule_sjf, schedule_srtf, Policy,
};
pub use simulator::{simulate_all, SimulationOutcome, SimulationRequest, Simulator};
