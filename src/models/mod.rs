//! CPU scheduling domain models.
//!
//! Provides the input record (`Process`) and the output record (`Timeline`)
//! shared by every scheduling policy.
//!
//! | u-cpusched | Textbook term |
//! |------------|---------------|
//! | Process | Job / PCB |
//! | Slice | Gantt chart bar |
//! | Timeline | Gantt chart |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Occupant, Slice, Timeline};
