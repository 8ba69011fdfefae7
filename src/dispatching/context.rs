//! Scheduling context for dispatching rule evaluation.

/// Runtime scheduling state passed to dispatching rules.
///
/// Per-process state (remaining work, priority) lives on the process itself;
/// the context only carries what is shared across candidates. The built-in
/// rules are time-independent; `clock` is for custom rules whose key
/// depends on the current time, such as time spent waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation clock (ticks).
    pub clock: i64,
}

impl SchedulingContext {
    /// Creates a context at the given clock.
    pub fn at_time(clock: i64) -> Self {
        Self { clock }
    }
}
