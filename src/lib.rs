//! Single-processor CPU scheduling simulator.
//!
//! Computes, for FCFS, SJF, SRTF, priority and round-robin scheduling, the
//! exact execution timeline of a process set and the per-process
//! completion, turnaround and waiting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `Slice`, `Occupant`
//! - **`dispatching`**: Selection rules (SJF, SRTF, priority, FIFO) and the rule engine
//! - **`scheduler`**: The five policies, `Simulator`, and run-level KPIs
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs, bad times, quantum, priorities)
//! - **`report`**: Plain-text results table and Gantt strip
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{Policy, Simulator};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 1),
//! ];
//! let outcome = Simulator::new(Policy::RoundRobin { quantum: 2 })
//!     .run(&processes)
//!     .unwrap();
//! assert_eq!(outcome.process("P3").unwrap().completion, Some(5));
//! ```
//!
//! # Model
//!
//! Time is a logical integer clock starting at 0. There is one processor,
//! no I/O blocking and no priority aging.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SchedError;
