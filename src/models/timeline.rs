//! Timeline (Gantt) model.
//!
//! A timeline is the ordered record of who occupied the processor and when.
//! Slices are contiguous from t=0 to the final clock: every tick is owned by
//! exactly one process or by idle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who holds the processor during a slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// No process was ready.
    Idle,
    /// The process with this ID was running.
    Process(String),
}

impl Occupant {
    /// Whether this is the idle marker.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }

    /// Process ID, or `None` for idle.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Occupant::Idle => None,
            Occupant::Process(id) => Some(id),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Idle => f.write_str("Idle"),
            Occupant::Process(id) => f.write_str(id),
        }
    }
}

/// One `[start, end)` interval of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Occupant of the processor.
    pub occupant: Occupant,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(occupant: Occupant, start: i64, end: i64) -> Self {
        Self {
            occupant,
            start,
            end,
        }
    }

    /// Creates a slice run by the given process.
    pub fn process(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self::new(Occupant::Process(id.into()), start, end)
    }

    /// Creates an idle slice.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::new(Occupant::Idle, start, end)
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered, gap-free sequence of slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Zero-length slices are dropped.
    pub fn push(&mut self, slice: Slice) {
        debug_assert!(slice.start <= slice.end, "slice ends before it starts");
        debug_assert!(
            self.end() == slice.start,
            "slice at {} leaves a gap or overlap after {}",
            slice.start,
            self.end()
        );
        if slice.duration() > 0 {
            self.slices.push(slice);
        }
    }

    /// Records `id` running over `[start, end)`.
    pub fn push_process(&mut self, id: &str, start: i64, end: i64) {
        self.push(Slice::process(id, start, end));
    }

    /// Records idle over `[start, end)`.
    pub fn push_idle(&mut self, start: i64, end: i64) {
        self.push(Slice::idle(start, end));
    }

    /// Collapses consecutive slices with the same occupant, in place.
    ///
    /// Idle only merges with idle; a process only merges with itself.
    pub fn merge_adjacent(&mut self) {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in self.slices.drain(..) {
            match merged.last_mut() {
                Some(last) if last.occupant == slice.occupant && last.end == slice.start => {
                    last.end = slice.end;
                }
                _ => merged.push(slice),
            }
        }
        self.slices = merged;
    }

    /// Returns a merged copy, leaving `self` untouched.
    pub fn merged(&self) -> Self {
        let mut copy = self.clone();
        copy.merge_adjacent();
        copy
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// End of the last slice (0 when empty).
    pub fn end(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Ticks spent running the given process.
    pub fn busy_time_of(&self, process_id: &str) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.occupant.process_id() == Some(process_id))
            .map(Slice::duration)
            .sum()
    }

    /// Ticks spent idle.
    pub fn idle_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.occupant.is_idle())
            .map(Slice::duration)
            .sum()
    }

    /// Slices run by the given process.
    pub fn slices_for(&self, process_id: &str) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.occupant.process_id() == Some(process_id))
            .collect()
    }

    /// Whether slices start at 0, are non-empty, and abut each other.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for s in &self.slices {
            if s.start != cursor || s.end <= s.start {
                return false;
            }
            cursor = s.end;
        }
        true
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
