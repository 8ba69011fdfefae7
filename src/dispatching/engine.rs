//! Rule engine for multi-criteria dispatching.
//!
//! Chains dispatching rules in sequence: a later rule is only consulted
//! when every earlier rule ties. A final tie-breaker makes every ordering
//! total, so runs are reproducible regardless of collection order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Position in the caller's input (default).
    #[default]
    InputOrder,
    /// Process ID (lexicographic), then input order.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{RuleEngine, TieBreaker};
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::EarliestArrival)
///     .with_final_tie_breaker(TieBreaker::InputOrder);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after every rule added before it.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Final tie-breaking strategy.
    pub fn final_tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts all processes by priority (highest priority first).
    ///
    /// Returns indices into `processes`.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(processes, a, b, context));
        indices
    }

    /// Returns the best candidate index, or `None` if there are no candidates.
    ///
    /// `candidates` are indices into `processes`.
    pub fn select_best<I>(
        &self,
        processes: &[Process],
        candidates: I,
        context: &SchedulingContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(processes, a, b, context))
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare(
        &self,
        processes: &[Process],
        a: usize,
        b: usize,
        context: &SchedulingContext,
    ) -> Ordering {
        let (pa, pb) = (&processes[a], &processes[b]);
        for rule in &self.rules {
            let ord = rule.evaluate(pa, context).cmp(&rule.evaluate(pb, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::InputOrder => a.cmp(&b),
            TieBreaker::ById => pa.id.cmp(&pb.id).then(a.cmp(&b)),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
