//! Input validation for scheduling runs.
//!
//! Checks the process set and policy parameters before any policy runs.
//! Detects:
//! - Empty process sets
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Time horizons that do not fit the integer clock
//! - Missing or non-positive round-robin quantum
//! - Missing priorities under priority scheduling
//!
//! All issues are collected; validation never stops at the first one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::scheduler::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative processor time.
    NonPositiveBurst,
    /// The latest arrival plus the total burst does not fit in `i64`.
    HorizonOverflow,
    /// Round-robin was configured without a quantum.
    MissingQuantum,
    /// Round-robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Priority scheduling was requested but a process has no priority.
    MissingPriority,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set in isolation.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every arrival is >= 0
/// 4. Every burst is > 0
/// 5. The latest arrival plus the total burst fits in `i64`, which bounds
///    every clock value a policy can reach
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);
    finish(errors)
}

/// Validates a process set against the policy that will run it.
///
/// Adds policy-specific checks on top of [`validate_processes`]:
/// round-robin needs a positive quantum, priority scheduling needs a
/// priority on every process.
pub fn validate_input(processes: &[Process], policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);

    match policy {
        Policy::RoundRobin { quantum } if *quantum <= 0 => {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round-robin quantum must be positive, got {quantum}"),
            ));
        }
        Policy::Priority => {
            for p in processes.iter().filter(|p| p.priority.is_none()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPriority,
                    format!("Process '{}' has no priority", p.id),
                ));
            }
        }
        _ => {}
    }

    finish(errors)
}

fn check_processes(processes: &[Process], errors: &mut Vec<ValidationError>) {
    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
        return;
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at negative time {}", p.id, p.arrival),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!("Latest arrival {latest_arrival} plus total burst exceeds the clock range"),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
